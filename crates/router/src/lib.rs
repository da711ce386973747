//! `parkshell-router` — route table, path matching and navigation guarding.
//!
//! Every navigation goes through [`Router::navigate`]: the path is resolved
//! against the static route table, resolution-level aliases are followed,
//! and the [`guard`] decides between allowing the navigation and redirecting
//! it. The decision is synchronous and never faults.

pub mod guard;
pub mod route;

pub use guard::{Decision, LOGIN_PATH, decide};
pub use route::{RouteDescriptor, RouteParams, default_routes};

use parkshell_core::SessionUser;

/// Bound on alias chains; the static table holds only `/` → `/login`, this
/// just keeps a misconfigured table from spinning.
const MAX_REDIRECT_HOPS: usize = 8;

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDescriptor,
    pub params: RouteParams,
}

/// The application router: a static route table plus the guard.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<RouteDescriptor>,
}

impl Router {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    pub fn with_default_routes() -> Self {
        Self::new(default_routes())
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Resolve a concrete path to its route descriptor and captured params.
    ///
    /// First match wins, in table order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// Decide a navigation to `path` for the given session state.
    ///
    /// Aliases are followed before guarding, so navigating `/` while logged
    /// out resolves as a redirect to `/login`, not as an allow of `/`.
    pub fn navigate(&self, path: &str, user: Option<&SessionUser>) -> Decision {
        let mut current: &str = path;
        let mut alias: Option<&'static str> = None;
        let mut hops = 0;

        let decision = loop {
            let matched = self.resolve(current);

            if let Some(target) = matched.as_ref().and_then(|m| m.route.redirect) {
                hops += 1;
                if hops > MAX_REDIRECT_HOPS {
                    // Fail safe: a runaway alias chain must not bypass auth.
                    tracing::warn!(path, "redirect chain exceeded {MAX_REDIRECT_HOPS} hops");
                    break Decision::Redirect(LOGIN_PATH);
                }
                alias = Some(target);
                current = target;
                continue;
            }

            if matched.is_none() {
                tracing::debug!(path = current, "no route matched");
            }

            let decision = guard::decide(matched.as_ref().map(|m| m.route), user);
            break match (decision, alias) {
                (Decision::Allow, Some(target)) => Decision::Redirect(target),
                (decision, _) => decision,
            };
        };

        tracing::debug!(path, ?decision, authenticated = user.is_some(), "navigation decided");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkshell_core::Role;

    #[test]
    fn root_redirects_to_login() {
        let router = Router::with_default_routes();
        assert_eq!(router.navigate("/", None), Decision::Redirect("/login"));

        // Aliases retarget even for logged-in users.
        let admin = SessionUser::new(Role::admin());
        assert_eq!(
            router.navigate("/", Some(&admin)),
            Decision::Redirect("/login")
        );
    }

    #[test]
    fn unauthenticated_dashboard_visit_redirects_to_login() {
        let router = Router::with_default_routes();
        assert_eq!(
            router.navigate("/user-dashboard", None),
            Decision::Redirect("/login")
        );
    }

    #[test]
    fn slot_detail_is_guarded_through_the_pattern() {
        let router = Router::with_default_routes();
        assert_eq!(
            router.navigate("/slots/17", None),
            Decision::Redirect("/login")
        );

        let user = SessionUser::new(Role::user());
        assert_eq!(router.navigate("/slots/17", Some(&user)), Decision::Allow);
    }

    #[test]
    fn resolve_captures_slot_id() {
        let router = Router::with_default_routes();
        let matched = router.resolve("/slots/a7").unwrap();
        assert_eq!(matched.route.pattern, "/slots/:id");
        assert_eq!(matched.params.get("id").map(String::as_str), Some("a7"));
    }

    #[test]
    fn admin_on_user_dashboard_goes_home() {
        let router = Router::with_default_routes();
        let admin = SessionUser::new(Role::admin());
        assert_eq!(
            router.navigate("/user-dashboard", Some(&admin)),
            Decision::Redirect("/admin-dashboard")
        );
    }

    #[test]
    fn user_history_visit_is_allowed() {
        let router = Router::with_default_routes();
        let user = SessionUser::new(Role::user());
        assert_eq!(router.navigate("/history", Some(&user)), Decision::Allow);
    }

    #[test]
    fn unknown_path_is_allowed() {
        let router = Router::with_default_routes();
        assert_eq!(router.navigate("/no-such-page", None), Decision::Allow);
    }

    #[test]
    fn cyclic_alias_table_fails_safe_to_login() {
        let router = Router::new(vec![
            RouteDescriptor::redirect("/a", "/b"),
            RouteDescriptor::redirect("/b", "/a"),
        ]);
        // A runaway chain terminates at the login redirect, never an allow.
        assert_eq!(router.navigate("/a", None), Decision::Redirect("/login"));

        let admin = SessionUser::new(Role::admin());
        assert_eq!(
            router.navigate("/a", Some(&admin)),
            Decision::Redirect("/login")
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn protected_path() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("/user-dashboard".to_string()),
                Just("/history".to_string()),
                Just("/admin-dashboard".to_string()),
                "[a-z0-9]{1,8}".prop_map(|id| format!("/slots/{id}")),
            ]
        }

        proptest! {
            #[test]
            fn logged_out_protected_navigation_always_hits_login(path in protected_path()) {
                let router = Router::with_default_routes();
                prop_assert_eq!(router.navigate(&path, None), Decision::Redirect("/login"));
            }

            #[test]
            fn mismatched_role_redirects_match_the_admin_split(role in "[A-Z]{1,10}") {
                let router = Router::with_default_routes();
                let user = SessionUser::new(Role::new(role.clone()));

                if role == "ADMIN" {
                    prop_assert_eq!(
                        router.navigate("/user-dashboard", Some(&user)),
                        Decision::Redirect("/admin-dashboard")
                    );
                    prop_assert_eq!(
                        router.navigate("/admin-dashboard", Some(&user)),
                        Decision::Allow
                    );
                } else {
                    prop_assert_eq!(
                        router.navigate("/admin-dashboard", Some(&user)),
                        Decision::Redirect("/user-dashboard")
                    );
                }
            }

            #[test]
            fn public_routes_never_redirect(role in "[A-Z]{1,10}") {
                let router = Router::with_default_routes();
                let user = SessionUser::new(Role::new(role));

                for path in ["/login", "/register"] {
                    prop_assert_eq!(router.navigate(path, None), Decision::Allow);
                    prop_assert_eq!(router.navigate(path, Some(&user)), Decision::Allow);
                }
            }
        }
    }
}
