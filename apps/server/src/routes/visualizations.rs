// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Visualization generation endpoint.

use crate::error::ApiError;
use crate::types::{CreateVisualizationRequest, RenderStats, VisualizationResponse};
use crate::AppState;
use axum::{extract::State, Json};
use pipeviz_core::{visualization_path, ValidatedVisualization};
use std::time::{Duration, Instant};

/// POST /api/v1/visualizations - Generate a visualization.
///
/// Serves the artifact from the cache when present; otherwise calls the
/// external renderer and, when the render was slow enough to be worth
/// memoizing, stores the result under the derived key in a detached task.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateVisualizationRequest>,
) -> Result<Json<VisualizationResponse>, ApiError> {
    let validated = ValidatedVisualization::from_request(
        request.visualization_type,
        &request.input_path,
        &request.arguments,
    )?;
    let cache_key = visualization_path(validated.visualization_type, &validated.input_path);

    // Fetch errors are a miss; only a non-empty artifact counts as a hit.
    match state.store.fetch(&cache_key).await {
        Ok(Some(bytes)) if !bytes.is_empty() => {
            tracing::info!(key = %cache_key, "Cache HIT");
            return Ok(Json(VisualizationResponse {
                cache_key,
                html: String::from_utf8(bytes)?,
                error: None,
                stats: RenderStats {
                    from_cache: true,
                    render_time_ms: 0,
                },
            }));
        }
        Ok(_) => {
            tracing::debug!(key = %cache_key, "Cache MISS");
        }
        Err(e) => {
            tracing::warn!(key = %cache_key, error = %e, "Cache fetch failed, treating as miss");
        }
    }

    let started = Instant::now();
    let html = state.renderer.render(&validated.renderer_arguments()).await?;
    let render_time = started.elapsed();

    tracing::info!(
        key = %cache_key,
        render_time_ms = render_time.as_millis() as u64,
        "Rendered visualization"
    );

    // Renders above the threshold are written back in a detached task that
    // outlives the request; failures are only logged.
    if render_time > Duration::from_millis(state.config.cache_write_threshold_ms) {
        let store = state.store.clone();
        let key = cache_key.clone();
        let bytes = html.clone().into_bytes();
        tokio::spawn(async move {
            if let Err(e) = store.put(&key, &bytes).await {
                tracing::error!(key = %key, error = %e, "Failed to store rendered artifact");
            }
        });
    }

    Ok(Json(VisualizationResponse {
        cache_key,
        html,
        error: None,
        stats: RenderStats {
            from_cache: false,
            render_time_ms: render_time.as_millis() as u64,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::{ArtifactStore, RendererClient};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use pipeviz_core::VisualizationType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Spawn a loopback rendering service answering every POST with the
    /// given status and body after an optional delay.
    async fn spawn_fake_renderer(
        status: StatusCode,
        body: &'static str,
        delay: Duration,
    ) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler_hits = hits.clone();
        let app = Router::new().route(
            "/",
            post(move || {
                let hits = handler_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(delay).await;
                    (status, body)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), hits)
    }

    async fn test_state(renderer_url: &str, cache_dir: &str, threshold_ms: u64) -> AppState {
        let config = Config {
            port: 0,
            renderer_url: renderer_url.to_string(),
            renderer_timeout_secs: 5,
            cache_dir: cache_dir.to_string(),
            cache_write_threshold_ms: threshold_ms,
            request_timeout_secs: 5,
        };
        AppState {
            store: Arc::new(ArtifactStore::new(&config.cache_dir).await),
            renderer: Arc::new(RendererClient::new(
                &config.renderer_url,
                Duration::from_secs(config.renderer_timeout_secs),
            )),
            config: Arc::new(config),
        }
    }

    fn table_request(input_path: &str) -> CreateVisualizationRequest {
        CreateVisualizationRequest {
            input_path: input_path.to_string(),
            visualization_type: VisualizationType::Table,
            arguments: String::new(),
        }
    }

    /// Poll for a deferred store write to land.
    async fn wait_for_artifact(store: &ArtifactStore, key: &str) -> Option<Vec<u8>> {
        for _ in 0..50 {
            if let Ok(Some(bytes)) = store.fetch(key).await {
                return Some(bytes);
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        None
    }

    #[tokio::test]
    async fn test_missing_input_path_never_touches_renderer() {
        let (url, hits) = spawn_fake_renderer(StatusCode::OK, "<html/>", Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&url, dir.path().to_str().unwrap(), 2000).await;

        let err = create(State(state), Json(table_request("")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_touch_renderer() {
        let (url, hits) = spawn_fake_renderer(StatusCode::OK, "<html/>", Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&url, dir.path().to_str().unwrap(), 2000).await;

        let mut request = table_request("gs://bucket/data.csv");
        request.arguments = "{not json".to_string();
        let err = create(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_renderer() {
        let (url, hits) = spawn_fake_renderer(StatusCode::OK, "<html>fresh</html>", Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&url, dir.path().to_str().unwrap(), 2000).await;

        let key = visualization_path(VisualizationType::Table, "gs://bucket/data.csv");
        state.store.put(&key, b"<html>cached</html>").await.unwrap();

        let Json(response) = create(State(state), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap();
        assert_eq!(response.html, "<html>cached</html>");
        assert_eq!(response.cache_key, key);
        assert!(response.stats.from_cache);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_cached_artifact_is_a_miss() {
        let (url, hits) = spawn_fake_renderer(StatusCode::OK, "<html>fresh</html>", Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&url, dir.path().to_str().unwrap(), 2000).await;

        let key = visualization_path(VisualizationType::Table, "gs://bucket/data.csv");
        state.store.put(&key, b"").await.unwrap();

        let Json(response) = create(State(state), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap();
        assert_eq!(response.html, "<html>fresh</html>");
        assert!(!response.stats.from_cache);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fast_render_is_not_stored() {
        let (url, hits) = spawn_fake_renderer(StatusCode::OK, "<html>fresh</html>", Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        // Threshold far above anything a loopback render can take.
        let state = test_state(&url, dir.path().to_str().unwrap(), 60_000).await;

        let key = visualization_path(VisualizationType::Table, "gs://bucket/data.csv");
        let Json(response) = create(State(state.clone()), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap();
        assert_eq!(response.html, "<html>fresh</html>");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(state.store.fetch(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slow_render_is_stored_under_derived_key() {
        let (url, hits) =
            spawn_fake_renderer(StatusCode::OK, "<html>slow</html>", Duration::from_millis(150))
                .await;
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&url, dir.path().to_str().unwrap(), 50).await;

        let key = visualization_path(VisualizationType::Table, "gs://bucket/data.csv");
        let Json(response) = create(State(state.clone()), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap();
        assert_eq!(response.html, "<html>slow</html>");
        assert!(!response.stats.from_cache);

        let stored = wait_for_artifact(&state.store, &key).await;
        assert_eq!(stored.as_deref(), Some(b"<html>slow</html>".as_ref()));

        // A repeat request is now a hit and never reaches the renderer again.
        let Json(repeat) = create(State(state), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap();
        assert!(repeat.stats.from_cache);
        assert_eq!(repeat.html, "<html>slow</html>");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_renderer_failure_surfaces_and_stores_nothing() {
        let (url, _hits) = spawn_fake_renderer(StatusCode::INTERNAL_SERVER_ERROR, "boom", Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&url, dir.path().to_str().unwrap(), 0).await;

        let key = visualization_path(VisualizationType::Table, "gs://bucket/data.csv");
        let err = create(State(state.clone()), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rendering(_)));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(state.store.fetch(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_renderer_surfaces_rendering_failure() {
        let dir = tempfile::tempdir().unwrap();
        // Nothing listens on this port.
        let state = test_state("http://127.0.0.1:1", dir.path().to_str().unwrap(), 2000).await;

        let err = create(State(state), Json(table_request("gs://bucket/data.csv")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rendering(_)));
    }
}
