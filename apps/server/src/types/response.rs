// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use serde::{Deserialize, Serialize};

/// Result of a visualization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationResponse {
    /// Artifact-store key for this visualization.
    pub cache_key: String,
    /// Rendered HTML, either fresh or served from the cache.
    pub html: String,
    /// Soft-failure diagnostic; hard failures surface as HTTP errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Generation statistics.
    pub stats: RenderStats,
}

/// Generation statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Whether the result was served from the cache.
    pub from_cache: bool,
    /// Time spent in the external renderer (ms); zero on cache hits.
    pub render_time_ms: u64,
}
