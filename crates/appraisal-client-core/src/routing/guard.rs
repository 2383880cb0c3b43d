use appraisal_shared::{
    const_config::route::{
        ROUTE_ADMIN_HOME, ROUTE_CLIENT_HOME, ROUTE_COMPANY_HOME, ROUTE_LOGIN,
        ROUTE_REDIRECT_PARAM,
    },
    session::Session,
    uac::RoleId,
};

use super::RouteMeta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Navigate to this location instead
    Redirect(String),
}

/// The login view, optionally carrying where to return to after signing in
pub fn login_location(redirect: Option<&str>) -> String {
    match redirect {
        Some(redirect) => format!(
            "{ROUTE_LOGIN}?{ROUTE_REDIRECT_PARAM}={}",
            urlencoding::encode(redirect)
        ),
        None => ROUTE_LOGIN.to_string(),
    }
}

/// Landing route for each role. Roles we do not know have none
pub fn role_home(role: RoleId) -> Option<&'static str> {
    match role {
        RoleId::Admin => Some(ROUTE_ADMIN_HOME),
        RoleId::ClientEmployee => Some(ROUTE_CLIENT_HOME),
        RoleId::CompanyEmployee => Some(ROUTE_COMPANY_HOME),
        RoleId::Unrecognized => None,
    }
}

/// Decides a single navigation attempt to `attempted` (path and query) whose
/// route declares `meta`. `session` must be read fresh for each attempt
pub fn evaluate(meta: &RouteMeta, session: &Session, attempted: &str) -> GuardDecision {
    if !meta.requires_auth {
        return GuardDecision::Allow;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect(login_location(Some(attempted)));
    }
    if session.satisfies(&meta.role) {
        return GuardDecision::Allow;
    }
    let location = session
        .role
        .and_then(role_home)
        .map(str::to_string)
        .unwrap_or_else(|| login_location(None));
    GuardDecision::Redirect(location)
}
