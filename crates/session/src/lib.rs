//! `parkshell-session` — the client-held session of the logged-in user.
//!
//! One explicitly constructed [`SessionContext`] per app instance holds the
//! current user in memory and mirrors it to persistent storage under a fixed
//! key. The in-memory value is the source of truth while the app runs;
//! storage is authoritative only at cold start.

mod context;

pub use context::{SESSION_KEY, SessionContext};
