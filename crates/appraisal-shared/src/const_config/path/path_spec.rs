use std::fmt::Display;

use reqwest_cross::reqwest::{self, Method};

/// Endpoint template. Paths containing `{id}` need [`PathSpec::with_id`]
/// before use
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: reqwest::Method,
}

/// Concrete endpoint a request is sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    pub path: String,
    pub method: reqwest::Method,
}

impl PathSpec {
    const ID_PLACEHOLDER: &'static str = "{id}";

    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PUT,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    pub fn with_id<I: Display>(&self, id: I) -> ApiPath {
        debug_assert!(
            self.path.contains(Self::ID_PLACEHOLDER),
            "{} has no id placeholder",
            self.path
        );
        ApiPath {
            path: self
                .path
                .replace(Self::ID_PLACEHOLDER, &id.to_string()),
            method: self.method.clone(),
        }
    }
}

impl From<PathSpec> for ApiPath {
    fn from(value: PathSpec) -> Self {
        debug_assert!(
            !value.path.contains(PathSpec::ID_PLACEHOLDER),
            "{} requires an id",
            value.path
        );
        Self {
            path: value.path.to_string(),
            method: value.method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_substituted() {
        // Arrange
        let spec = PathSpec::get("/api/evaluation-requests/{id}/report/download");

        // Act
        let actual = spec.with_id(42);

        // Assert
        assert_eq!(actual.path, "/api/evaluation-requests/42/report/download");
        assert_eq!(actual.method, Method::GET);
    }
}
