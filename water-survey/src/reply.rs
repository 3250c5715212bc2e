use serde_json::Value;

use crate::SubmissionError;

/// Used when the collector reports an error without a message.
pub const DEFAULT_APPLICATION_ERROR: &str = "Save failed";

/// The structured part of a collector reply.
///
/// Collectors may answer with any body. Only a JSON document counts as a
/// structured reply, and only `status: "error"` in it counts as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorReply(Value);

impl CollectorReply {
    /// Parse a reply body. Empty or non-JSON bodies have no structure.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok().map(Self)
    }

    pub fn is_error(&self) -> bool {
        self.0.get("status").and_then(Value::as_str) == Some("error")
    }

    /// The collector's message, if it sent a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.0
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Turn the reply into the submission outcome.
    pub fn into_result(self) -> Result<(), SubmissionError> {
        if self.is_error() {
            let message = self.message().unwrap_or(DEFAULT_APPLICATION_ERROR);
            return Err(SubmissionError::Application(message.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstructured_bodies() {
        assert_eq!(CollectorReply::parse(""), None);
        assert_eq!(CollectorReply::parse("<html>Moved</html>"), None);
    }

    #[test]
    fn success_reply() {
        let reply = CollectorReply::parse(r#"{"status":"success","row":42}"#).unwrap();
        assert!(!reply.is_error());
        assert!(reply.into_result().is_ok());
    }

    #[test]
    fn non_object_json_is_success() {
        let reply = CollectorReply::parse("\"ok\"").unwrap();
        assert!(reply.into_result().is_ok());
    }

    #[test]
    fn error_reply_with_message() {
        let reply = CollectorReply::parse(r#"{"status":"error","message":"Sheet locked"}"#).unwrap();
        assert!(matches!(
            reply.into_result(),
            Err(SubmissionError::Application(message)) if message == "Sheet locked"
        ));
    }

    #[test]
    fn error_reply_without_message() {
        for body in [r#"{"status":"error"}"#, r#"{"status":"error","message":""}"#] {
            let reply = CollectorReply::parse(body).unwrap();
            assert!(matches!(
                reply.into_result(),
                Err(SubmissionError::Application(message)) if message == DEFAULT_APPLICATION_ERROR
            ));
        }
    }
}
