use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Malformed request: {reason}")]
    MalformedRequest { reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NotifierError {
    /// HTTP status a caller sees for this error.
    pub fn status(&self) -> u16 {
        match self {
            NotifierError::MethodNotAllowed { .. } => 405,
            NotifierError::MalformedRequest { .. } | NotifierError::MissingField { .. } => 400,
            _ => 500,
        }
    }

    /// Plain-text body returned to the caller. Internal details stay in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            NotifierError::MethodNotAllowed { .. } => "Method Not Allowed",
            NotifierError::MalformedRequest { .. } => "Invalid request",
            NotifierError::MissingField { .. } => "Missing email or code",
            _ => "Internal Server Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;
