// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the external rendering service.

use std::time::Duration;
use thiserror::Error;

/// Errors from a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The rendering service was unreachable or the call timed out.
    #[error("render request failed: {0}")]
    Request(String),

    /// The rendering service answered with a non-success status.
    #[error("rendering service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for the rendering service.
///
/// The service accepts a form POST with a single `arguments` field and
/// answers with the rendered HTML as the raw response body. Calls carry a
/// bounded timeout; the service is a separate process whose availability
/// is not guaranteed.
pub struct RendererClient {
    url: String,
    http: reqwest::Client,
}

impl RendererClient {
    /// Create a new client for the service at `url`.
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build renderer HTTP client"),
        }
    }

    /// Render a visualization from a flag-style argument string.
    pub async fn render(&self, arguments: &str) -> Result<String, RenderError> {
        let resp = self
            .http
            .post(&self.url)
            .form(&[("arguments", arguments)])
            .send()
            .await
            .map_err(|e| RenderError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RenderError::Status { status, body });
        }

        resp.text()
            .await
            .map_err(|e| RenderError::Request(e.to_string()))
    }
}
