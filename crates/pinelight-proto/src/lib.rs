//! Wire envelope types and codec for the LED canvas protocol.
//!
//! Every logical request is wrapped in a [`wire::ClientEnvelope`] and sent as
//! exactly one transport message; every reply arrives as one
//! [`wire::ServerEnvelope`]. This crate is stateless — it knows nothing about
//! connections or sessions, only how request and reply values map to bytes.

pub mod codec;
pub mod error;
pub mod wire;

pub use codec::{decode, encode, Payload, Reply, Request};
pub use error::{ProtoError, Result};
