use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Role;

/// Identity of the currently logged-in user, as returned by the
/// authentication collaborator on successful login.
///
/// Only `role` is examined by this layer. Every other identity field
/// (`id`, `name`, `email`, …) passes through the flatten map unexamined
/// and survives the persist/load round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub role: Role,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            extra: Map::new(),
        }
    }

    /// Attach an opaque identity field (builder-style, mainly for tests).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Look up an opaque identity field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
