//! Client side routes and the guard that decides whether a view may be shown

mod guard;
mod router;
mod table;

pub use guard::{evaluate, login_location, role_home, GuardDecision};
pub use router::{NavigationOutcome, Router};
pub use table::{Route, RouteMeta, RouteTable};

/// Splits a location into its path and query string, the query is `None` if
/// there was no `?`
pub(crate) fn split_location(location: &str) -> (&str, Option<&str>) {
    match location.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (location, None),
    }
}
