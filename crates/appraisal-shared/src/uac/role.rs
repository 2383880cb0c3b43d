use std::fmt::Display;

/// Closed set of roles the backend assigns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum RoleId {
    Admin,
    ClientEmployee,
    CompanyEmployee,
    /// A stored role naming none of the known roles. Satisfies no requirement
    Unrecognized,
}

impl RoleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleId::Admin => "ADMIN",
            RoleId::ClientEmployee => "CLIENT_EMPLOYEE",
            RoleId::CompanyEmployee => "COMPANY_EMPLOYEE",
            RoleId::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Never fails, unknown names map to [`RoleId::Unrecognized`]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ADMIN" => RoleId::Admin,
            "CLIENT_EMPLOYEE" => RoleId::ClientEmployee,
            "COMPANY_EMPLOYEE" => RoleId::CompanyEmployee,
            _ => RoleId::Unrecognized,
        }
    }

    /// Returns `true` if the role id is [`Unrecognized`].
    ///
    /// [`Unrecognized`]: RoleId::Unrecognized
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized)
    }
}

impl Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role a route or capability demands of the session.
///
/// This is the only place role matching is implemented, the route guard and
/// any display logic both go through [`RoleRequirement::is_satisfied_by`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleRequirement {
    #[default]
    Unrestricted,
    Single(RoleId),
    AnyOf(Vec<RoleId>),
}

impl RoleRequirement {
    pub fn any_of<I: IntoIterator<Item = RoleId>>(roles: I) -> Self {
        Self::AnyOf(roles.into_iter().collect())
    }

    /// Returns `true` if the role requirement is [`Unrestricted`].
    ///
    /// [`Unrestricted`]: RoleRequirement::Unrestricted
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    pub fn is_satisfied_by(&self, role: Option<RoleId>) -> bool {
        let Some(role) = role.filter(|r| !r.is_unrecognized()) else {
            return self.is_unrestricted();
        };
        match self {
            RoleRequirement::Unrestricted => true,
            RoleRequirement::Single(required) => role == *required,
            RoleRequirement::AnyOf(allowed) => allowed.contains(&role),
        }
    }
}

impl From<RoleId> for RoleRequirement {
    fn from(value: RoleId) -> Self {
        Self::Single(value)
    }
}
