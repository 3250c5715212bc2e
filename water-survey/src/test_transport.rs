//! Test transport for exercising submissions without a collector.
//!
//! `TestTransport` answers requests from a script of pre-defined replies and
//! records every request it receives. Clones share the script and the
//! record, so a test can hand one clone to a store and inspect the other.
//!
//! # Example
//!
//! ```rust,ignore
//! use water_survey::{CollectorConfig, SubmissionClient, SurveyStore, TestTransport};
//!
//! let transport = TestTransport::new().with_reply(500, "");
//! let client = SubmissionClient::new(CollectorConfig::new("http://collector"), transport.clone());
//! let mut store = SurveyStore::new(client);
//!
//! // ... fill in and submit ...
//!
//! assert_eq!(transport.request_count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Transport, TransportReply};

/// A request captured by `TestTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

impl RecordedRequest {
    /// Parse the request body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Reply(TransportReply),
    Failure(String),
}

/// A transport that returns pre-configured replies.
///
/// When the script runs out, every further request gets `200` with an empty
/// body.
#[derive(Debug, Clone, Default)]
pub struct TestTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Error type for TestTransport.
#[derive(Debug, thiserror::Error)]
pub enum TestTransportError {
    #[error("Scripted transport failure: {0}")]
    Scripted(String),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TestTransport {
    /// Create a transport that accepts everything with `200`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next unanswered request.
    pub fn with_reply(self, status: u16, body: impl Into<String>) -> Self {
        lock(&self.script).push_back(Scripted::Reply(TransportReply::new(status, body)));
        self
    }

    /// Queue a transport failure for the next unanswered request.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        lock(&self.script).push_back(Scripted::Failure(message.into()));
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl Transport for TestTransport {
    type Error = TestTransportError;

    fn post_json(&self, url: &str, body: &str) -> Result<TransportReply, Self::Error> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            body: body.to_string(),
        });

        match lock(&self.script).pop_front() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Failure(message)) => Err(TestTransportError::Scripted(message)),
            None => Ok(TransportReply::new(200, "")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_in_order_then_accepts() {
        let transport = TestTransport::new()
            .with_reply(500, "")
            .with_failure("timed out");

        assert_eq!(transport.post_json("u", "1").unwrap().status, 500);
        assert!(transport.post_json("u", "2").is_err());
        assert_eq!(transport.post_json("u", "3").unwrap(), TransportReply::new(200, ""));
        assert_eq!(transport.request_count(), 3);
    }

    #[test]
    fn clones_share_records() {
        let transport = TestTransport::new();
        let clone = transport.clone();
        clone.post_json("http://collector", "{}").unwrap();
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest {
                url: "http://collector".into(),
                body: "{}".into(),
            }]
        );
    }
}
