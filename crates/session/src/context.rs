use parkshell_core::{Role, SessionError, SessionResult, SessionUser};
use parkshell_storage::KeyValueStore;

/// Fixed storage key for the persisted session payload.
pub const SESSION_KEY: &str = "vps_user";

/// Holder of the current user, synchronized with persistent storage.
///
/// Constructed once at boot and passed by reference to whatever needs the
/// session (router guard, views). Storage failures never propagate out of
/// this type: they are logged and the session degrades to the logged-out
/// state, which is always safe for the guard.
#[derive(Debug)]
pub struct SessionContext<S: KeyValueStore> {
    store: S,
    current: Option<SessionUser>,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Load the persisted session, replacing the in-memory user.
    ///
    /// Must run exactly once before the UI mounts so the initial render
    /// reflects the correct auth state. An absent entry is the normal
    /// logged-out state; a corrupt entry is logged, purged, and treated as
    /// logged out so the bad payload cannot re-trigger on the next start.
    pub fn load_from_storage(&mut self) {
        self.current = match self.read_persisted() {
            Ok(user) => user,
            Err(SessionError::Corrupt(msg)) => {
                tracing::error!("corrupt persisted session, logging out: {msg}");
                if let Err(err) = self.store.remove(SESSION_KEY) {
                    tracing::error!("failed to purge corrupt session entry: {err:#}");
                }
                None
            }
            Err(SessionError::Storage(msg)) => {
                tracing::error!("failed to read persisted session: {msg}");
                None
            }
        };
    }

    /// Set the current user and mirror it to storage.
    ///
    /// The payload is stored as-is; identity fields beyond `role` are not
    /// examined. If the mirror write fails the in-memory user still wins
    /// (storage is only consulted again at cold start).
    pub fn save(&mut self, user: SessionUser) {
        match serde_json::to_string(&user) {
            Ok(payload) => {
                if let Err(err) = self.store.set(SESSION_KEY, &payload) {
                    tracing::error!("failed to persist session: {err:#}");
                }
            }
            Err(err) => tracing::error!("failed to serialize session: {err}"),
        }
        self.current = Some(user);
    }

    /// Clear the current user and remove the persisted entry.
    ///
    /// Idempotent: logging out while logged out is a no-op in effect.
    pub fn logout(&mut self) {
        if let Err(err) = self.store.remove(SESSION_KEY) {
            tracing::error!("failed to remove persisted session: {err:#}");
        }
        self.current = None;
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn role(&self) -> Option<&Role> {
        self.current.as_ref().map(|user| &user.role)
    }

    fn read_persisted(&self) -> SessionResult<Option<SessionUser>> {
        let raw = self
            .store
            .get(SESSION_KEY)
            .map_err(|err| SessionError::storage(format!("{err:#}")))?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let user = serde_json::from_str(&raw)
            .map_err(|err| SessionError::corrupt(err.to_string()))?;
        Ok(Some(user))
    }
}
