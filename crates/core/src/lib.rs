//! `parkshell-core` — shared domain primitives for the ParkShell client.
//!
//! This crate contains **pure domain** types (no storage, no framework
//! concerns): the role model, the session identity, and the error model.

pub mod error;
pub mod role;
pub mod user;

pub use error::{SessionError, SessionResult};
pub use role::Role;
pub use user::SessionUser;
