//! The client held authentication session and its persisted representation

use serde_json::Value;
use tracing::warn;

use crate::{
    errors::ConversionError,
    token::AuthToken,
    uac::{LoginResponse, RoleId, RoleRequirement},
};

/// Persisted shape of the session, stored as one json record per storage scope
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub can_edit_evaluation_requests: Option<Value>,
    #[serde(default)]
    pub can_delete_evaluation_requests: Option<Value>,
}

/// Either empty (no token, no role) or populated.
///
/// The empty session is the [`Default`], its capability flags are `false`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<AuthToken>,
    pub role: Option<RoleId>,
    pub full_name: Option<String>,
    pub can_edit_evaluation_requests: bool,
    pub can_delete_evaluation_requests: bool,
}

/// A capability is granted unless the stored value is exactly `false`
pub fn capability_flag(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Bool(false)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|x| !x.is_empty())
}

impl Session {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn satisfies(&self, requirement: &RoleRequirement) -> bool {
        requirement.is_satisfied_by(self.role)
    }

    /// Parses a stored record. Anything that cannot be read as a record
    /// degrades to the empty session
    pub fn from_stored_json(raw: &str) -> Self {
        match serde_json::from_str::<SessionRecord>(raw) {
            Ok(record) => record.into(),
            Err(err) => {
                warn!(?err, "discarding malformed session record");
                Self::empty()
            }
        }
    }

    pub fn to_stored_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&SessionRecord::from(self))
    }
}

impl From<SessionRecord> for Session {
    fn from(value: SessionRecord) -> Self {
        let token = non_empty(value.token).and_then(|x| AuthToken::try_from(x).ok());
        let role = non_empty(value.role).map(|x| RoleId::from_wire(&x));
        let (Some(token), Some(role)) = (token, role) else {
            return Self::empty();
        };
        Self {
            token: Some(token),
            role: Some(role),
            full_name: non_empty(value.full_name),
            can_edit_evaluation_requests: capability_flag(
                value.can_edit_evaluation_requests.as_ref(),
            ),
            can_delete_evaluation_requests: capability_flag(
                value.can_delete_evaluation_requests.as_ref(),
            ),
        }
    }
}

impl From<&Session> for SessionRecord {
    fn from(value: &Session) -> Self {
        Self {
            token: value.token.as_ref().map(|x| x.expose_secret().to_string()),
            role: value.role.map(|x| x.as_str().to_string()),
            full_name: value.full_name.clone(),
            can_edit_evaluation_requests: Some(Value::Bool(value.can_edit_evaluation_requests)),
            can_delete_evaluation_requests: Some(Value::Bool(
                value.can_delete_evaluation_requests,
            )),
        }
    }
}

impl TryFrom<LoginResponse> for Session {
    type Error = ConversionError;

    fn try_from(value: LoginResponse) -> Result<Self, Self::Error> {
        let role = non_empty(Some(value.role)).ok_or(ConversionError::Empty)?;
        Ok(Self {
            token: Some(value.token),
            role: Some(RoleId::from_wire(&role)),
            full_name: non_empty(value.full_name),
            can_edit_evaluation_requests: capability_flag(
                value.can_edit_evaluation_requests.as_ref(),
            ),
            can_delete_evaluation_requests: capability_flag(
                value.can_delete_evaluation_requests.as_ref(),
            ),
        })
    }
}
