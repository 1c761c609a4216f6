// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// URL of the external rendering service.
    pub renderer_url: String,
    /// Timeout for a single render call, in seconds.
    pub renderer_timeout_secs: u64,
    /// Directory for artifact cache storage.
    pub cache_dir: String,
    /// Renders slower than this many milliseconds are written to the cache.
    pub cache_write_threshold_ms: u64,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .unwrap_or(8080),
            renderer_url: std::env::var("RENDERER_URL")
                .unwrap_or_else(|_| "http://localhost:8888".into()),
            renderer_timeout_secs: std::env::var("RENDERER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap_or(30),
            cache_dir: std::env::var("CACHE_DIR").unwrap_or_else(|_| {
                // Auto-detect environment:
                // - Docker: use /app/cache (created in Dockerfile)
                // - Local dev: use ./.cache relative to server directory
                if std::path::Path::new("/.dockerenv").exists() {
                    "/app/cache".into()
                } else {
                    // Use absolute path for local development to avoid issues
                    std::env::current_dir()
                        .ok()
                        .and_then(|dir| dir.join(".cache").to_str().map(|s| s.to_string()))
                        .unwrap_or_else(|| "./.cache".into())
                }
            }),
            cache_write_threshold_ms: std::env::var("CACHE_WRITE_THRESHOLD_MS")
                .unwrap_or_else(|_| "2000".into())
                .parse()
                .unwrap_or(2000),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
