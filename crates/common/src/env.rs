//! Environment/runtime helpers
//!
//! Sanity checks on expected directories at startup. The data directory is
//! created by the file store itself.

use tracing::warn;

/// Warn when the optional static assets directory is missing.
/// Returns whether it exists.
pub async fn ensure_env(frontend_dir: &str) -> bool {
    let present = tokio::fs::metadata(frontend_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !present {
        warn!(%frontend_dir, "frontend assets directory not found; serving embedded page only");
    }
    present
}
