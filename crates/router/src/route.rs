//! Static route table and path matching.

use std::collections::HashMap;

use parkshell_core::Role;

/// Parameters captured from `:name` segments during matching.
pub type RouteParams = HashMap<String, String>;

/// Static per-route access configuration.
///
/// Descriptors are built once at startup and never mutated; the guard only
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; segments starting with `:` capture one concrete segment.
    pub pattern: &'static str,

    /// Navigation requires a logged-in user.
    pub requires_auth: bool,

    /// Navigation additionally requires this exact role.
    pub required_role: Option<Role>,

    /// Resolution-level alias: navigating here retargets to this path.
    pub redirect: Option<&'static str>,
}

impl RouteDescriptor {
    /// A route anyone may visit, logged in or not.
    pub fn public(pattern: &'static str) -> Self {
        Self {
            pattern,
            requires_auth: false,
            required_role: None,
            redirect: None,
        }
    }

    /// A route requiring a logged-in user holding `role`.
    pub fn protected(pattern: &'static str, role: Role) -> Self {
        Self {
            pattern,
            requires_auth: true,
            required_role: Some(role),
            redirect: None,
        }
    }

    /// An alias route that retargets navigation to `target`.
    pub fn redirect(pattern: &'static str, target: &'static str) -> Self {
        Self {
            pattern,
            requires_auth: false,
            required_role: None,
            redirect: Some(target),
        }
    }

    /// Match a concrete path against this descriptor's pattern.
    ///
    /// Matching is segment-wise and exact on segment count; a `:name`
    /// segment matches exactly one non-empty concrete segment and captures
    /// it. Leading and trailing slashes are insignificant.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let pattern_segments = segments(self.pattern);
        let path_segments = segments(path);

        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
            if let Some(name) = pattern_segment.strip_prefix(':') {
                params.insert(name.to_string(), (*path_segment).to_string());
            } else if pattern_segment != path_segment {
                return None;
            }
        }

        Some(params)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// The application's route table.
///
/// | Path | Auth | Role |
/// |---|---|---|
/// | `/` | — | redirects to `/login` |
/// | `/login`, `/register` | no | — |
/// | `/user-dashboard`, `/slots/:id`, `/history` | yes | USER |
/// | `/admin-dashboard` | yes | ADMIN |
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::redirect("/", "/login"),
        RouteDescriptor::public("/login"),
        RouteDescriptor::public("/register"),
        RouteDescriptor::protected("/user-dashboard", Role::user()),
        RouteDescriptor::protected("/slots/:id", Role::user()),
        RouteDescriptor::protected("/history", Role::user()),
        RouteDescriptor::protected("/admin-dashboard", Role::admin()),
    ]
}
