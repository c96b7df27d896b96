//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the static web root is missing; requests for static assets will 404.
/// Returns whether the directory exists.
pub async fn ensure_web_root(web_root: &str) -> bool {
    match tokio::fs::metadata(web_root).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%web_root, "web root is not a directory; static assets will 404");
            false
        }
        Err(_) => {
            warn!(%web_root, "web root not found; static assets will 404");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_web_root;

    #[tokio::test]
    async fn missing_web_root_is_reported() {
        assert!(!ensure_web_root("definitely/not/a/real/dir").await);
    }

    #[tokio::test]
    async fn existing_dir_is_accepted() {
        assert!(ensure_web_root(env!("CARGO_MANIFEST_DIR")).await);
    }
}
