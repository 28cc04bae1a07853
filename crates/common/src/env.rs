//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when an optional static asset directory is missing.
pub async fn ensure_assets(assets_dir: &str) {
    if tokio::fs::metadata(assets_dir).await.is_err() {
        warn!(%assets_dir, "assets directory not found; static assets may 404");
    }
}

/// Create the directory holding a SQLite file URL such as
/// `sqlite://./data/app.db?mode=rwc`. In-memory URLs are left alone.
pub async fn ensure_sqlite_parent(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_path(url) else { return Ok(()) };
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

fn sqlite_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(path)
}
