//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the browser client directory is missing; the API still works
/// but `/` will 404.
pub async fn ensure_env(frontend_dir: &str) -> bool {
    let present = tokio::fs::metadata(frontend_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !present {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
    }
    present
}
