//! Navigation service — the not-found page's "Back" control.

use crate::ports::{NavigationError, Navigator};

/// Application service wrapping a [`Navigator`].
pub struct NavigationService<N> {
    navigator: N,
}

impl<N: Navigator> NavigationService<N> {
    /// Create a new service backed by the given navigator.
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Step back one history entry. Calls [`Navigator::back`] exactly once.
    ///
    /// # Errors
    ///
    /// Propagates the [`NavigationError`] reported by the navigator; the
    /// caller decides how to surface it.
    pub fn go_back(&self) -> Result<(), NavigationError> {
        tracing::debug!("navigating back");
        self.navigator.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Cell<usize>,
    }

    impl Navigator for RecordingNavigator {
        fn back(&self) -> Result<(), NavigationError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[derive(Default)]
    struct DetachedNavigator {
        calls: Cell<usize>,
    }

    impl Navigator for DetachedNavigator {
        fn back(&self) -> Result<(), NavigationError> {
            self.calls.set(self.calls.get() + 1);
            Err(NavigationError::Unavailable)
        }
    }

    #[test]
    fn should_call_back_once_per_go_back() {
        let navigator = Rc::new(RecordingNavigator::default());
        let service = NavigationService::new(Rc::clone(&navigator));

        service.go_back().unwrap();
        assert_eq!(navigator.calls.get(), 1);

        service.go_back().unwrap();
        service.go_back().unwrap();
        assert_eq!(navigator.calls.get(), 3);
    }

    #[test]
    fn should_propagate_navigator_failure_without_retrying() {
        let navigator = Rc::new(DetachedNavigator::default());
        let service = NavigationService::new(Rc::clone(&navigator));

        assert_eq!(service.go_back(), Err(NavigationError::Unavailable));
        assert_eq!(navigator.calls.get(), 1);
    }
}
