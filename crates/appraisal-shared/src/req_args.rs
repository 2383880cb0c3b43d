//! This module stores the expected format of the arguments for the requests
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/api/users` would map to [`api::UserListFilter`]. Some structs
//! are not serializable but are still included here to know what needs to be
//! sent

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

pub mod api;

#[derive(Clone)]
pub struct LoginReqArgs {
    pub login: String,
    pub password: SecretString,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(login: S, password: SecretString) -> Self {
        Self {
            login: login.into(),
            password,
        }
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("login", &self.login)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}
