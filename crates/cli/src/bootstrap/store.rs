use crate::di::Services;
use tracing::{info, warn};

/// A missing store file means a fresh install. Any other failure is logged
/// and the server starts with whatever the table already holds.
pub async fn load_store(services: &Services) {
    let files = services.store.files();
    if !files.primary_exists() {
        info!(path = %files.primary().display(), "No store file yet, starting empty");
        return;
    }

    if let Err(e) = services.persist.load().await {
        warn!(error = %e, "Failed to load record store");
    }
}
