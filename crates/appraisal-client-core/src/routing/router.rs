use std::sync::{Arc, Mutex};

use anyhow::bail;
use appraisal_shared::{
    const_config::{client::MAX_NAVIGATION_REDIRECTS, route::ROUTE_LOGIN},
    log_err_as_error,
};
use tracing::{debug, info, instrument, warn};

use crate::{navigation::Navigator, session_store::SessionStore};

use super::{evaluate, split_location, GuardDecision, RouteTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Arrived {
        location: String,
        route: &'static str,
        /// Set if the guard sent us somewhere other than requested
        redirected_from: Option<String>,
    },
    /// The final location was already the current one, history is unchanged
    AlreadyThere { location: String },
    NotFound { location: String },
}

/// In process navigation with history, every push goes through the route
/// guard
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
    session_store: SessionStore,
    history: Arc<Mutex<Vec<String>>>,
}

impl Router {
    /// Starts at `initial_location` without consulting the guard
    pub fn new<S: Into<String>>(
        table: RouteTable,
        session_store: SessionStore,
        initial_location: S,
    ) -> Self {
        Self {
            table: Arc::new(table),
            session_store,
            history: Arc::new(Mutex::new(vec![initial_location.into()])),
        }
    }

    /// Current location including any query string
    pub fn location(&self) -> String {
        self.history
            .lock()
            .expect("mutex poisoned")
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().expect("mutex poisoned").clone()
    }

    /// Errors only if the guard keeps redirecting
    #[instrument(skip(self))]
    pub fn push(&self, location: &str) -> anyhow::Result<NavigationOutcome> {
        let mut attempt = location.to_string();
        let mut redirected_from = None;
        for _ in 0..=MAX_NAVIGATION_REDIRECTS {
            let Some(route) = self.table.resolve(&attempt) else {
                warn!(attempt, "no route matches");
                return Ok(NavigationOutcome::NotFound { location: attempt });
            };
            let session = self.session_store.read();
            match evaluate(&route.meta, &session, &attempt) {
                GuardDecision::Allow => return Ok(self.arrive(attempt, route.name, redirected_from)),
                GuardDecision::Redirect(next) => {
                    debug!(from = attempt, to = next, "guard redirected navigation");
                    redirected_from.get_or_insert_with(|| location.to_string());
                    attempt = next;
                }
            }
        }
        bail!("gave up navigating to {location:?} after {MAX_NAVIGATION_REDIRECTS} redirects")
    }

    fn arrive(
        &self,
        location: String,
        route: &'static str,
        redirected_from: Option<String>,
    ) -> NavigationOutcome {
        let mut history = self.history.lock().expect("mutex poisoned");
        if history.last() == Some(&location) {
            return NavigationOutcome::AlreadyThere { location };
        }
        info!(location, route, "navigated");
        history.push(location.clone());
        NavigationOutcome::Arrived {
            location,
            route,
            redirected_from,
        }
    }
}

impl Navigator for Router {
    fn current_path(&self) -> String {
        let location = self.location();
        split_location(&location).0.to_string()
    }

    fn navigate(&self, location: &str) {
        let (target_path, _query) = split_location(location);
        if target_path == ROUTE_LOGIN && self.current_path() == ROUTE_LOGIN {
            debug!("already on the login view");
            return;
        }
        log_err_as_error!(self.push(location));
    }
}

#[cfg(test)]
mod tests {
    use appraisal_shared::{session::Session, uac::RoleId};

    use crate::StorageScope;

    use super::*;

    fn router_with(role: Option<RoleId>, start: &str) -> Router {
        let store = SessionStore::in_memory();
        if let Some(role) = role {
            let session = Session {
                token: Some("abc".to_string().try_into().unwrap()),
                role: Some(role),
                ..Default::default()
            };
            store.write(&session, StorageScope::Ephemeral).unwrap();
        }
        Router::new(RouteTable::default(), store, start)
    }

    #[test]
    fn anonymous_user_is_sent_to_login_with_return_path() {
        // Arrange
        let router = router_with(None, "/");

        // Act
        let actual = router.push("/client/requests").unwrap();

        // Assert
        assert_eq!(
            actual,
            NavigationOutcome::Arrived {
                location: "/login?redirect=%2Fclient%2Frequests".to_string(),
                route: "login",
                redirected_from: Some("/client/requests".to_string()),
            }
        );
        assert_eq!(router.current_path(), "/login");
    }

    #[test]
    fn wrong_role_lands_on_own_home() {
        // Arrange
        let router = router_with(Some(RoleId::ClientEmployee), "/");

        // Act
        let actual = router.push("/admin/users").unwrap();

        // Assert
        assert_eq!(
            actual,
            NavigationOutcome::Arrived {
                location: "/client".to_string(),
                route: "client-home",
                redirected_from: Some("/admin/users".to_string()),
            }
        );
    }

    #[test]
    fn admin_may_enter_company_views() {
        let router = router_with(Some(RoleId::Admin), "/admin");
        let actual = router.push("/company/requests/7").unwrap();
        assert!(matches!(
            actual,
            NavigationOutcome::Arrived {
                route: "company-request-detail",
                redirected_from: None,
                ..
            }
        ));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let router = router_with(None, "/");
        let actual = router.push("/missing").unwrap();
        assert_eq!(
            actual,
            NavigationOutcome::NotFound {
                location: "/missing".to_string()
            }
        );
        assert_eq!(router.history(), vec!["/"]);
    }

    #[test]
    fn pushing_current_location_adds_no_history() {
        // Arrange
        let router = router_with(Some(RoleId::CompanyEmployee), "/company");

        // Act
        let actual = router.push("/company").unwrap();

        // Assert
        assert_eq!(
            actual,
            NavigationOutcome::AlreadyThere {
                location: "/company".to_string()
            }
        );
        assert_eq!(router.history(), vec!["/company"]);
    }

    #[test]
    fn redundant_login_navigation_is_ignored() {
        // Arrange
        let router = router_with(None, "/client");
        router.navigate("/login?redirect=%2Fclient");

        // Act
        router.navigate("/login?redirect=%2Fclient");
        router.navigate("/login?redirect=%2Flogin");

        // Assert
        assert_eq!(router.history(), vec!["/client", "/login?redirect=%2Fclient"]);
    }

    #[test]
    fn guard_reads_session_fresh() {
        // Arrange
        let router = router_with(Some(RoleId::ClientEmployee), "/");
        router.push("/client").unwrap();

        // Act
        router.session_store.clear();
        let actual = router.push("/client/requests").unwrap();

        // Assert
        assert!(matches!(actual, NavigationOutcome::Arrived { route: "login", .. }));
    }
}
