/// Errors that can occur while decoding a server envelope.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The bytes do not parse as a valid envelope (corrupt/truncated frame).
    #[error("malformed server envelope: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The envelope parsed but carries no recognized message.
    #[error("server envelope carries no message")]
    EmptyEnvelope,
}

pub type Result<T> = std::result::Result<T, ProtoError>;
