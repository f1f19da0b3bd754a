use std::fmt;

use pinelight_session::SessionError;

// Exit code constants, sysexits-flavored like the rest of our tooling.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn session_error(context: &str, err: SessionError) -> CliError {
    let code = match &err {
        SessionError::Config(_) | SessionError::InvalidArgument { .. } => USAGE,
        SessionError::Transport(_) | SessionError::Closed => TRANSPORT_ERROR,
        SessionError::AuthenticationFailed => PERMISSION_DENIED,
        SessionError::Protocol(_) | SessionError::UnexpectedReply { .. } => DATA_INVALID,
        SessionError::Server(_) | SessionError::NotConnected => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}
