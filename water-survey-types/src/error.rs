use crate::Field;

/// Shown to the respondent when a network or collector failure stopped the save.
pub const GENERIC_SAVE_ERROR: &str = "We couldn't save your response. Please try again.";

/// Shown when no collector endpoint has been configured.
pub const MISSING_ENDPOINT_ERROR: &str =
    "Missing collector endpoint. Configure the survey before submitting.";

/// Error type for rejected field edits.
///
/// A rejected edit leaves the response untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Type mismatch for '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: Field,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{value}' is not an option for '{field}'")]
    UnknownOption { field: Field, value: String },

    #[error("Value {value} for '{field}' is outside {min}..={max}")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The survey was already submitted; only a reset unlocks it.
    #[error("Survey already submitted")]
    Locked,
}

/// Error type for a failed submission.
///
/// The variants keep the internal detail for logs and tests; respondents only
/// ever see `user_message()`.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// No endpoint, or the endpoint is still the placeholder.
    #[error("Collector endpoint is not configured")]
    Configuration,

    /// The collector answered with a non-success HTTP status.
    #[error("Collector responded with HTTP status {0}")]
    Status(u16),

    /// The request never completed (DNS, connect, TLS, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[source] anyhow::Error),

    /// The collector answered but reported a failure.
    #[error("Collector rejected the response: {0}")]
    Application(String),

    #[error("Could not encode the payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SubmissionError {
    /// Create a transport error from any error type.
    pub fn transport(err: impl Into<anyhow::Error>) -> Self {
        Self::Transport(err.into())
    }

    /// Whether the failure happened on the wire (status or transport).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Status(_) | Self::Transport(_))
    }

    /// The message shown to the respondent.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Configuration => MISSING_ENDPOINT_ERROR,
            Self::Status(_) | Self::Transport(_) | Self::Application(_) | Self::Serialize(_) => {
                GENERIC_SAVE_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_detail() {
        let err = SubmissionError::Application("Sheet locked".into());
        assert_eq!(err.to_string(), "Collector rejected the response: Sheet locked");
        assert_eq!(err.user_message(), GENERIC_SAVE_ERROR);

        let err = SubmissionError::Status(503);
        assert!(err.is_network());
        assert_eq!(err.user_message(), GENERIC_SAVE_ERROR);

        assert_eq!(
            SubmissionError::Configuration.user_message(),
            MISSING_ENDPOINT_ERROR
        );
    }

    #[test]
    fn transport_keeps_source() {
        let err = SubmissionError::transport(anyhow::anyhow!("connection refused"));
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn field_error_display() {
        let err = FieldError::OutOfRange {
            field: Field::Nps,
            value: 11,
            min: 1,
            max: 10,
        };
        assert_eq!(err.to_string(), "Value 11 for 'nps' is outside 1..=10");
    }
}
