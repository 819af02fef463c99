//! Browser implementation of the [`Navigator`] port.

use repohelper_app::ports::{NavigationError, Navigator};

/// Drives `window.history` of the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl Navigator for BrowserHistory {
    fn back(&self) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::Unavailable)?;
        let history = window
            .history()
            .map_err(|_| NavigationError::Unavailable)?;
        history
            .back()
            .map_err(|err| NavigationError::Rejected(format!("{err:?}")))
    }
}
