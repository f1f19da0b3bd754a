use bytes::Bytes;
use prost::Message;

use crate::error::{ProtoError, Result};
use crate::wire::{
    client_envelope, server_envelope, AuthenticateRequest, ClientEnvelope, GetCanvasInfoRequest,
    GetPixelsRequest, ServerEnvelope, SetCanvasRequest, SetPixelsRequest,
};

/// An outbound request, one variant per wire operation.
///
/// Each variant is built as a complete value; there is no partially
/// constructed request observable anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Present credentials. Must be the first request on a connection.
    Authenticate { secret: String },
    /// Query canvas geometry.
    GetCanvasInfo,
    /// Query the current strip state.
    GetPixels,
    /// Replace the canvas with row-major RGBA bytes.
    SetCanvas { pixels: Bytes },
    /// Replace every strip LED with a packed color value.
    SetPixels { leds: Vec<u64> },
}

/// A decoded success payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Auth { success: bool },
    CanvasInfo { width: u32, height: u32 },
    Pixels { leds: Vec<u64> },
}

/// A decoded server reply: exactly one of success or error per envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Success(Payload),
    /// Server-reported failure. The message text is preserved exactly.
    Error(String),
}

/// Wrap a request in the client envelope and serialize it.
///
/// Pure function. Serializing a well-typed request value cannot fail.
pub fn encode(request: &Request) -> Bytes {
    let msg = match request {
        Request::Authenticate { secret } => {
            client_envelope::Msg::Authenticate(AuthenticateRequest {
                secret: secret.clone(),
            })
        }
        Request::GetCanvasInfo => client_envelope::Msg::GetCanvasInfo(GetCanvasInfoRequest {}),
        Request::GetPixels => client_envelope::Msg::GetPixels(GetPixelsRequest {}),
        Request::SetCanvas { pixels } => client_envelope::Msg::SetCanvas(SetCanvasRequest {
            pixels: pixels.clone(),
        }),
        Request::SetPixels { leds } => {
            client_envelope::Msg::SetPixels(SetPixelsRequest { leds: leds.clone() })
        }
    };
    ClientEnvelope { msg: Some(msg) }.encode_to_vec().into()
}

/// Parse one server envelope.
///
/// A present error field becomes [`Reply::Error`]; callers must propagate it
/// rather than continue. Bytes that do not parse as an envelope at all, or an
/// envelope with no recognized message, are a [`ProtoError`].
pub fn decode(bytes: &[u8]) -> Result<Reply> {
    let envelope = ServerEnvelope::decode(bytes)?;
    let msg = envelope.msg.ok_or(ProtoError::EmptyEnvelope)?;
    Ok(match msg {
        server_envelope::Msg::Authenticate(reply) => Reply::Success(Payload::Auth {
            success: reply.success,
        }),
        server_envelope::Msg::CanvasInfo(reply) => Reply::Success(Payload::CanvasInfo {
            width: reply.width,
            height: reply.height,
        }),
        server_envelope::Msg::Pixels(reply) => Reply::Success(Payload::Pixels { leds: reply.leds }),
        server_envelope::Msg::Error(reply) => Reply::Error(reply.message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{AuthenticateReply, CanvasInfoReply, ErrorReply, PixelsReply};

    fn server_bytes(msg: server_envelope::Msg) -> Vec<u8> {
        ServerEnvelope { msg: Some(msg) }.encode_to_vec()
    }

    #[test]
    fn test_encode_authenticate() {
        let bytes = encode(&Request::Authenticate {
            secret: "hunter2".to_string(),
        });

        let envelope = ClientEnvelope::decode(bytes.as_ref()).unwrap();
        match envelope.msg {
            Some(client_envelope::Msg::Authenticate(req)) => assert_eq!(req.secret, "hunter2"),
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn test_encode_set_canvas_carries_pixels() {
        let pixels = Bytes::from_static(&[0xFF, 0x00, 0x00, 0xFF]);
        let bytes = encode(&Request::SetCanvas {
            pixels: pixels.clone(),
        });

        let envelope = ClientEnvelope::decode(bytes.as_ref()).unwrap();
        match envelope.msg {
            Some(client_envelope::Msg::SetCanvas(req)) => assert_eq!(req.pixels, pixels),
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn test_encode_set_pixels_carries_values() {
        let bytes = encode(&Request::SetPixels {
            leds: vec![0xFF0000, 0x00FF00, 0x0000FF],
        });

        let envelope = ClientEnvelope::decode(bytes.as_ref()).unwrap();
        match envelope.msg {
            Some(client_envelope::Msg::SetPixels(req)) => {
                assert_eq!(req.leds, vec![0xFF0000, 0x00FF00, 0x0000FF]);
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn test_empty_requests_encode_to_tagged_envelopes() {
        let info = ClientEnvelope::decode(encode(&Request::GetCanvasInfo).as_ref()).unwrap();
        assert!(matches!(
            info.msg,
            Some(client_envelope::Msg::GetCanvasInfo(_))
        ));

        let pixels = ClientEnvelope::decode(encode(&Request::GetPixels).as_ref()).unwrap();
        assert!(matches!(pixels.msg, Some(client_envelope::Msg::GetPixels(_))));
    }

    #[test]
    fn test_decode_auth_success() {
        let bytes = server_bytes(server_envelope::Msg::Authenticate(AuthenticateReply {
            success: true,
        }));

        let reply = decode(&bytes).unwrap();
        assert_eq!(reply, Reply::Success(Payload::Auth { success: true }));
    }

    #[test]
    fn test_decode_canvas_info() {
        let bytes = server_bytes(server_envelope::Msg::CanvasInfo(CanvasInfoReply {
            width: 40,
            height: 30,
        }));

        let reply = decode(&bytes).unwrap();
        assert_eq!(
            reply,
            Reply::Success(Payload::CanvasInfo {
                width: 40,
                height: 30
            })
        );
    }

    #[test]
    fn test_decode_pixels() {
        let bytes = server_bytes(server_envelope::Msg::Pixels(PixelsReply {
            leds: vec![1, 2, 3],
        }));

        let reply = decode(&bytes).unwrap();
        assert_eq!(reply, Reply::Success(Payload::Pixels { leds: vec![1, 2, 3] }));
    }

    #[test]
    fn test_decode_error_preserves_message() {
        let bytes = server_bytes(server_envelope::Msg::Error(ErrorReply {
            message: "canvas is busy".to_string(),
        }));

        let reply = decode(&bytes).unwrap();
        assert_eq!(reply, Reply::Error("canvas is busy".to_string()));
    }

    #[test]
    fn test_decode_truncated_frame() {
        let mut bytes = server_bytes(server_envelope::Msg::Error(ErrorReply {
            message: "truncate me".to_string(),
        }));
        bytes.truncate(bytes.len() - 4);

        let result = decode(&bytes);
        assert!(matches!(result, Err(ProtoError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_envelope() {
        let bytes = ServerEnvelope { msg: None }.encode_to_vec();
        let result = decode(&bytes);
        assert!(matches!(result, Err(ProtoError::EmptyEnvelope)));
    }
}
