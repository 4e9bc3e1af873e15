use crate::utils::error::{NotifierError, Result};
use crate::utils::validation::validate_present;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VERIFICATION_SUBJECT: &str = "Your Tobler CRM Verification Code";

/// Body of a verification-code request. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub email: String,
    pub code: String,
}

impl VerificationRequest {
    /// Parses a raw request body.
    ///
    /// Unparseable JSON and `null` are malformed. Any other non-object value
    /// has no fields, so it is reported as missing `email`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| NotifierError::MalformedRequest {
                reason: e.to_string(),
            })?;

        match value {
            Value::Object(fields) => Self::from_fields(&fields),
            Value::Null => Err(NotifierError::MalformedRequest {
                reason: "body is null".to_string(),
            }),
            _ => Self::from_fields(&Map::new()),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let email = validate_present("email", fields.get("email"))?;
        let code = validate_present("code", fields.get("code"))?;
        Ok(Self { email, code })
    }
}

/// The message handed to a [`crate::domain::ports::Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl VerificationEmail {
    pub fn for_request(request: &VerificationRequest) -> Self {
        Self {
            recipient: request.email.clone(),
            subject: VERIFICATION_SUBJECT.to_string(),
            body: format!("Your verification code is: {}", request.code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub success: bool,
}
