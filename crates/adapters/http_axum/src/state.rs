//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Bytes;

/// Application state shared across all axum handlers.
///
/// Cheap to clone: the shell is reference-counted [`Bytes`] and the assets
/// directory an `Arc<Path>`.
#[derive(Clone)]
pub struct AppState {
    shell: Bytes,
    assets_dir: Arc<Path>,
}

impl AppState {
    /// Create a new state from the shell document and the directory holding
    /// the compiled front-end.
    pub fn new(shell: impl Into<Bytes>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            assets_dir: Arc::from(assets_dir.into()),
        }
    }

    /// The `index.html` document that boots the front-end.
    #[must_use]
    pub fn shell(&self) -> Bytes {
        self.shell.clone()
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}
