//! Connection/session state machine for LED canvas servers.
//!
//! A [`Session`] authenticates against a remote LED server over WebSocket,
//! discovers the device geometry, and streams pixel updates. The protocol is
//! strictly one request/reply at a time; there is no multiplexing, no internal
//! timeout, and no retry — callers reconnect explicitly after a failure.

pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::Session;
