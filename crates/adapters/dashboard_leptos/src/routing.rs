//! Path-to-view selection for the client router.

use leptos::prelude::*;
use repohelper_domain::route::Route;

/// Memoized [`Route`] for a reactive pathname.
///
/// Only changes when the resolved route changes, so moving between two
/// unknown paths does not remount the 404 page.
pub fn route_for(pathname: impl Fn() -> String + Send + Sync + 'static) -> Memo<Route> {
    Memo::new(move |_| Route::resolve(&pathname()))
}
