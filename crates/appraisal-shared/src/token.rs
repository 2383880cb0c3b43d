use secrecy::{ExposeSecret as _, SecretString};

use crate::errors::ConversionError;

/// Opaque bearer credential issued by the login endpoint
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Value for the `Authorization` header
    pub fn bearer_header_value(&self) -> String {
        format!("Bearer {}", self.expose_secret())
    }
}

impl TryFrom<String> for AuthToken {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        Ok(Self(value.into()))
    }
}

impl PartialEq for AuthToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for AuthToken {}
