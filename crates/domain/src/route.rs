//! Route — which view a path selects.

/// Path served by the landing view.
pub const ROOT_PATH: &str = "/";

/// The views a path can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The landing form, served at [`ROOT_PATH`] only.
    Landing,
    /// Fallback for every other path.
    NotFound,
}

impl Route {
    /// Resolve a URL path (no query string, no fragment) to a route.
    ///
    /// Only an exact match on `/` selects [`Route::Landing`]; everything else,
    /// including the empty string and `//`, is [`Route::NotFound`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        if path == ROOT_PATH {
            Self::Landing
        } else {
            Self::NotFound
        }
    }

    #[must_use]
    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}
