// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cache retrieval endpoint.

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
};

/// GET /api/v1/cache/*key - Retrieve cached artifact.
pub async fn get_cached(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Html<String>, ApiError> {
    tracing::debug!(key = %key, "Cache lookup");

    match state.store.fetch(&key).await? {
        Some(bytes) => {
            tracing::info!(key = %key, "Cache HIT");
            Ok(Html(String::from_utf8(bytes)?))
        }
        None => {
            tracing::debug!(key = %key, "Cache MISS");
            Err(ApiError::NotFound(format!("Cache key not found: {}", key)))
        }
    }
}
