use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role tag used for access control.
///
/// Roles are intentionally opaque strings at this layer; there is no
/// hierarchy and no multi-role membership. Checks are exact, case-sensitive
/// string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An authenticated identity attached to a single request.
///
/// # Invariants
/// - If a record exists, all three fields are populated; upstream session
///   providers must never attach a partial record.
/// - Owned by exactly one request's execution; never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Single role tag from an open string domain.
    pub role: Role,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role: Role::new(role),
        }
    }

    /// The fixed synthetic identity used by the dev-mode bypass.
    pub fn dev() -> Self {
        Self::new("dev-user", "dev", "user")
    }
}
