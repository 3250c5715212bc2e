use chrono::Utc;
use tracing::debug;

use crate::{
    CollectorConfig, CollectorReply, HttpTransport, OverallScore, SubmissionError,
    SubmissionPayload, SurveyResponse, Transport,
};

/// Delivers finished responses to the collector.
///
/// One `submit` call is one exchange: no retries, no caching.
#[derive(Debug, Clone)]
pub struct SubmissionClient<T = HttpTransport> {
    config: CollectorConfig,
    transport: T,
}

impl SubmissionClient<HttpTransport> {
    /// Create a client posting over HTTP with the configured timeout.
    pub fn http(config: CollectorConfig) -> Result<Self, SubmissionError> {
        let transport = HttpTransport::new(config.timeout()).map_err(SubmissionError::transport)?;
        Ok(Self::new(config, transport))
    }
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(config: CollectorConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one response to the collector.
    ///
    /// Fails without touching the network when no endpoint is configured.
    /// Any 2xx status counts as success unless the body is JSON carrying
    /// `status: "error"`.
    pub fn submit(
        &self,
        response: &SurveyResponse,
        overall_score: OverallScore,
    ) -> Result<(), SubmissionError> {
        let endpoint = self.config.endpoint().ok_or(SubmissionError::Configuration)?;

        let payload = SubmissionPayload::new(response, overall_score, Utc::now());
        let body = payload.to_json()?;
        debug!(
            endpoint,
            bytes = body.len(),
            submitted_at = %payload.submitted_at(),
            "posting survey response"
        );

        let reply = self
            .transport
            .post_json(endpoint, &body)
            .map_err(SubmissionError::transport)?;
        debug!(status = reply.status, bytes = reply.body.len(), "collector replied");

        if !reply.is_success() {
            return Err(SubmissionError::Status(reply.status));
        }

        match CollectorReply::parse(&reply.body) {
            Some(structured) => structured.into_result(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, TestTransport};

    const ENDPOINT: &str = "https://collector.example/exec";

    fn response() -> SurveyResponse {
        SurveyResponse::new()
            .with_field(Field::Name, "Avery")
            .and_then(|r| r.with_field(Field::Email, "avery@email.com"))
            .unwrap()
    }

    fn submit(transport: &TestTransport, config: CollectorConfig) -> Result<(), SubmissionError> {
        let client = SubmissionClient::new(config, transport.clone());
        let response = response();
        client.submit(&response, OverallScore::from_ratings(response.topics()))
    }

    #[test]
    fn unconfigured_endpoint_skips_network() {
        let transport = TestTransport::new();
        let result = submit(&transport, CollectorConfig::unconfigured());
        assert!(matches!(result, Err(SubmissionError::Configuration)));

        let result = submit(
            &transport,
            CollectorConfig::new("https://script.google.com/macros/s/PASTE_YOUR_SCRIPT_ID/exec"),
        );
        assert!(matches!(result, Err(SubmissionError::Configuration)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn posts_payload_once() {
        let transport = TestTransport::new().with_reply(200, "");
        submit(&transport, CollectorConfig::new(ENDPOINT)).unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, ENDPOINT);
        let json = requests[0].json().unwrap();
        assert_eq!(json["name"], "Avery");
        assert_eq!(json["overallScore"], "4.0");
        assert!(json["submittedAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn non_success_status_is_network_error() {
        let transport = TestTransport::new().with_reply(500, r#"{"status":"success"}"#);
        let result = submit(&transport, CollectorConfig::new(ENDPOINT));
        assert!(matches!(result, Err(SubmissionError::Status(500))));
    }

    #[test]
    fn transport_failure_is_network_error() {
        let transport = TestTransport::new().with_failure("connection refused");
        let err = submit(&transport, CollectorConfig::new(ENDPOINT)).unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn unparseable_body_is_success() {
        let transport = TestTransport::new().with_reply(200, "<html>ok</html>");
        assert!(submit(&transport, CollectorConfig::new(ENDPOINT)).is_ok());
    }

    #[test]
    fn collector_error_is_application_error() {
        let transport =
            TestTransport::new().with_reply(200, r#"{"status":"error","message":"Sheet locked"}"#);
        let result = submit(&transport, CollectorConfig::new(ENDPOINT));
        assert!(matches!(
            result,
            Err(SubmissionError::Application(message)) if message == "Sheet locked"
        ));
    }
}
