use appraisal_shared::uac::{RoleId, RoleRequirement};

use super::split_location;

/// What a route demands before it may be shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub role: RoleRequirement,
}

impl RouteMeta {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn authenticated(role: RoleRequirement) -> Self {
        Self {
            requires_auth: true,
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    /// Absolute path where segments starting with `:` match any single segment
    pub pattern: String,
    pub meta: RouteMeta,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// First route whose pattern matches the path of `location`
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let (path, _query) = split_location(location);
        let segments = segments(path);
        self.routes
            .iter()
            .find(|route| pattern_matches(&route.pattern, &segments))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        let mut routes = vec![
            public("home", "/"),
            public("about", "/about"),
            public("contacts", "/contacts"),
            public("login", "/login"),
        ];
        routes.extend(family(
            "/admin",
            RoleId::Admin.into(),
            &[
                ("admin-dashboard", ""),
                ("admin-users", "users"),
                ("admin-contact-requests", "contact-requests"),
            ],
        ));
        routes.extend(family(
            "/client",
            RoleId::ClientEmployee.into(),
            &[
                ("client-home", ""),
                ("client-requests", "requests"),
                ("client-vehicle-requests", "vehicle-requests"),
                ("client-fixed-assets-requests", "fixed-assets-requests"),
                ("client-request-new", "requests/new"),
                ("client-request-edit", "request/:id"),
            ],
        ));
        routes.extend(family(
            "/company",
            RoleRequirement::any_of([RoleId::CompanyEmployee, RoleId::Admin]),
            &[
                ("company-dashboard", ""),
                ("company-requests", "requests"),
                ("company-request-detail", "requests/:id"),
                ("company-reports", "reports"),
            ],
        ));
        Self::new(routes)
    }
}

fn public(name: &'static str, pattern: &str) -> Route {
    Route {
        name,
        pattern: pattern.to_string(),
        meta: RouteMeta::public(),
    }
}

/// Child routes share the parent's requirement
fn family(
    prefix: &str,
    role: RoleRequirement,
    children: &[(&'static str, &str)],
) -> Vec<Route> {
    children
        .iter()
        .map(|&(name, suffix)| Route {
            name,
            pattern: if suffix.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}/{suffix}")
            },
            meta: RouteMeta::authenticated(role.clone()),
        })
        .collect()
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|x| !x.is_empty()).collect()
}

fn pattern_matches(pattern: &str, path_segments: &[&str]) -> bool {
    let pattern_segments = segments(pattern);
    pattern_segments.len() == path_segments.len()
        && pattern_segments
            .iter()
            .zip(path_segments)
            .all(|(expected, actual)| expected.starts_with(':') || expected == actual)
}
