//! Auth-session state for the current browser viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is owned by `App` and handed to each page as an explicit prop.
//! Pages read the token to authenticate requests and the role to gate
//! admin-only actions and pick the detail endpoint.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Viewer role as stored by the login flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// `ADMIN`: unlocks edit actions and the admin detail endpoint.
    Admin,
    /// `USER`: regular authenticated member of the registry.
    User,
    /// No session loaded.
    #[default]
    Anonymous,
    /// Any other role label the backend hands out.
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => Self::Anonymous,
            "ADMIN" => Self::Admin,
            "USER" => Self::User,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Anonymous => "",
            Self::Other(label) => label,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_owned()
    }
}

/// Authenticated session: bearer token plus resolved role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Role,
}

impl AuthState {
    pub fn new(token: Option<String>, role: Role) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
