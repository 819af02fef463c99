//! Navigation port — moving through the visitor's browsing history.

/// Failure reported by a [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No history object to talk to (no `window`, or not running in a browser).
    #[error("browser history is unavailable")]
    Unavailable,
    /// The platform refused the navigation request.
    #[error("navigation rejected: {0}")]
    Rejected(String),
}

/// Drives the platform's session history.
///
/// Calls are synchronous: they only queue the navigation, the platform
/// performs it afterwards. Going back with no prior entry is a no-op, not an
/// error.
pub trait Navigator {
    /// Step back one entry in the session history.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] when the history cannot be reached.
    fn back(&self) -> Result<(), NavigationError>;
}

impl<T: Navigator + ?Sized> Navigator for std::rc::Rc<T> {
    fn back(&self) -> Result<(), NavigationError> {
        (**self).back()
    }
}
