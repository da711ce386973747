//! `parkshell`
//!
//! **Responsibility:** app shell wiring for the parking booking client.
//!
//! The shell owns the boot sequence — observability, session context,
//! exactly-once session load, router — and exposes the navigation surface
//! the rendering layer drives. Rendering itself, HTTP, and backend
//! authentication are external collaborators.

use parkshell_core::SessionUser;
use parkshell_router::{Decision, Router};
use parkshell_session::SessionContext;
use parkshell_storage::KeyValueStore;

/// The assembled client shell: session context plus router.
#[derive(Debug)]
pub struct Shell<S: KeyValueStore> {
    session: SessionContext<S>,
    router: Router,
}

impl<S: KeyValueStore> Shell<S> {
    /// Boot the shell over the given storage backend.
    ///
    /// Loads the persisted session exactly once, before anything can
    /// navigate, so the first render reflects the correct auth state.
    pub fn boot(store: S) -> Self {
        parkshell_observability::init();

        let mut session = SessionContext::new(store);
        session.load_from_storage();

        let router = Router::with_default_routes();

        tracing::info!(
            authenticated = session.is_authenticated(),
            "shell booted"
        );

        Self { session, router }
    }

    /// Decide a navigation to `path` for the current session.
    pub fn navigate(&self, path: &str) -> Decision {
        self.router.navigate(path, self.session.current())
    }

    /// Record a successful login returned by the authentication collaborator.
    pub fn login(&mut self, user: SessionUser) {
        self.session.save(user);
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}
