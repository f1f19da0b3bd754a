/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session is misconfigured and the request cannot be populated.
    #[error("invalid session configuration: {0}")]
    Config(&'static str),

    /// Connection open/send/receive failure at the stream layer.
    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    /// The connection closed before a reply arrived.
    #[error("connection closed before a reply arrived")]
    Closed,

    /// Received bytes do not parse as a valid envelope.
    #[error("protocol error: {0}")]
    Protocol(#[from] pinelight_proto::ProtoError),

    /// The reply parsed but carries a payload of the wrong kind.
    #[error("unexpected reply: expected {expected}")]
    UnexpectedReply { expected: &'static str },

    /// The server rejected the credentials.
    #[error("server rejected credentials")]
    AuthenticationFailed,

    /// The server reported an error for a request.
    #[error("server error: {0}")]
    Server(String),

    /// An operation was attempted while disconnected.
    #[error("no connection established, call connect() first")]
    NotConnected,

    /// A buffer contract was violated by the caller.
    #[error("{what} has {actual} elements, expected {expected}")]
    InvalidArgument {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;
