use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Authorization tier of a session user.
///
/// Roles are opaque strings at this layer; the backend issues `"ADMIN"` or
/// `"USER"`, but persisted payloads may carry anything, so comparison is
/// exact string equality and unrecognized values simply fail every match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The administrator role as issued by the backend.
    pub fn admin() -> Self {
        Self(Cow::Borrowed("ADMIN"))
    }

    /// The regular-user role as issued by the backend.
    pub fn user() -> Self {
        Self(Cow::Borrowed("USER"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_admin(&self) -> bool {
        self.as_str() == "ADMIN"
    }

    /// Dashboard a user with this role belongs on.
    ///
    /// Everything that is not `ADMIN` lands on the user dashboard, including
    /// unrecognized role values found in stored data.
    pub fn home_path(&self) -> &'static str {
        if self.is_admin() {
            "/admin-dashboard"
        } else {
            "/user-dashboard"
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
