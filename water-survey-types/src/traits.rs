/// What the collector sent back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code.
    pub status: u16,

    /// Response body, empty when there was none or it could not be read.
    pub body: String,
}

impl TransportReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for delivering a serialized payload to the collector.
///
/// Transports perform exactly one exchange per call and never retry.
/// They decide nothing about success: status and body interpretation belong
/// to the submission client.
pub trait Transport {
    /// The error type for this transport.
    type Error: Into<anyhow::Error>;

    /// POST `body` to `url` with a JSON content type.
    ///
    /// # Returns
    /// * `Ok(reply)` whenever the collector answered, whatever the status
    /// * `Err` when no answer was received
    fn post_json(&self, url: &str, body: &str) -> Result<TransportReply, Self::Error>;
}
