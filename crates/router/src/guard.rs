//! Navigation guard: the pre-navigation decision function.

use parkshell_core::SessionUser;

use crate::route::RouteDescriptor;

/// Path unauthenticated navigations are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a navigation decision.
///
/// The guard never faults; every input resolves to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed to the requested target.
    Allow,
    /// Navigate to this path instead.
    Redirect(&'static str),
}

/// Decide a navigation against the target route's metadata and the current
/// session.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// An unmatched path carries no metadata and therefore no requirements.
/// Route-level aliases (`redirect`) are resolved by the router before this
/// runs. Role mismatches are sent to the *user's own* home, so a user can
/// never be bounced toward a dashboard their role does not grant.
pub fn decide(route: Option<&RouteDescriptor>, user: Option<&SessionUser>) -> Decision {
    let Some(route) = route else {
        return Decision::Allow;
    };

    if route.requires_auth && user.is_none() {
        return Decision::Redirect(LOGIN_PATH);
    }

    if let (Some(required), Some(user)) = (route.required_role.as_ref(), user) {
        if user.role != *required {
            return Decision::Redirect(user.role.home_path());
        }
    }

    Decision::Allow
}
