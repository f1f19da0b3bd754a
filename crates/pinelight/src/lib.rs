//! Client for remote LED canvas/strip servers.
//!
//! pinelight talks to an LED display server over WebSocket: authenticate,
//! discover the device geometry, stream pixel updates.
//!
//! # Crate Structure
//!
//! - [`proto`] — Wire envelope types and the request/reply codec
//! - [`session`] — The connection/session state machine

/// Re-export wire protocol types.
pub mod proto {
    pub use pinelight_proto::*;
}

/// Re-export session types.
pub mod session {
    pub use pinelight_session::*;
}

pub use pinelight_session::{Session, SessionError};
