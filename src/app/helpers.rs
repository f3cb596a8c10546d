//! Async helpers run through `Task::perform`

use std::path::PathBuf;
use std::time::Duration;

use crate::features::Movie;
use crate::features::catalog;

/// Load the seed catalog, flattening the error chain into one line
pub async fn load_seed_catalog(path: Option<PathBuf>) -> Result<Vec<Movie>, String> {
    catalog::load_catalog(path)
        .await
        .map_err(|e| format!("{:#}", e))
}

/// Sleep for toast auto-hide
pub async fn toast_delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}
