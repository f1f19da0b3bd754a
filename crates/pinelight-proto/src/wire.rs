//! Hand-maintained protobuf message definitions for the LED server protocol.
//!
//! Field numbering is part of the wire contract and must never be reused or
//! renumbered. The server owns the schema; this file mirrors it with explicit
//! `prost` tags so no codegen step is needed at build time.

use bytes::Bytes;

/// Authenticate with the server. Must be the first message on a connection.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AuthenticateRequest {
    /// Opaque credential handed out beforehand.
    #[prost(string, tag = "1")]
    pub secret: String,
}

/// Ask for the canvas geometry. The reply determines the buffer size that
/// [`SetCanvasRequest`] accepts.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetCanvasInfoRequest {}

/// Replace the whole canvas with the given image.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SetCanvasRequest {
    /// Row-major RGBA bytes, `width * height * 4` long.
    #[prost(bytes = "bytes", tag = "1")]
    pub pixels: Bytes,
}

/// Ask for the current state of every LED on the strip.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetPixelsRequest {}

/// Set every LED on the strip. The value count must match the strip length.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SetPixelsRequest {
    #[prost(uint64, repeated, tag = "1")]
    pub leds: Vec<u64>,
}

/// Reply to [`AuthenticateRequest`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct AuthenticateReply {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

/// Reply to [`GetCanvasInfoRequest`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct CanvasInfoReply {
    /// Canvas width in pixels. This is also the row stride.
    #[prost(uint32, tag = "1")]
    pub width: u32,
    /// Canvas height in pixels.
    #[prost(uint32, tag = "2")]
    pub height: u32,
}

/// Reply to [`GetPixelsRequest`]. One value per LED.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PixelsReply {
    #[prost(uint64, repeated, tag = "1")]
    pub leds: Vec<u64>,
}

/// Server-reported failure for the preceding request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ErrorReply {
    #[prost(string, tag = "1")]
    pub message: String,
}

/// Client → server envelope. Exactly one message per transport frame.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ClientEnvelope {
    #[prost(oneof = "client_envelope::Msg", tags = "1, 2, 3, 4, 5")]
    pub msg: Option<client_envelope::Msg>,
}

pub mod client_envelope {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        Authenticate(super::AuthenticateRequest),
        #[prost(message, tag = "2")]
        GetCanvasInfo(super::GetCanvasInfoRequest),
        #[prost(message, tag = "3")]
        SetCanvas(super::SetCanvasRequest),
        #[prost(message, tag = "4")]
        GetPixels(super::GetPixelsRequest),
        #[prost(message, tag = "5")]
        SetPixels(super::SetPixelsRequest),
    }
}

/// Server → client envelope. Exactly one message per transport frame.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ServerEnvelope {
    #[prost(oneof = "server_envelope::Msg", tags = "1, 2, 3, 4")]
    pub msg: Option<server_envelope::Msg>,
}

pub mod server_envelope {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        Authenticate(super::AuthenticateReply),
        #[prost(message, tag = "2")]
        CanvasInfo(super::CanvasInfoReply),
        #[prost(message, tag = "3")]
        Pixels(super::PixelsReply),
        #[prost(message, tag = "4")]
        Error(super::ErrorReply),
    }
}
