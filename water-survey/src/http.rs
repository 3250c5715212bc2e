use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::{Transport, TransportReply};

/// Blocking HTTP transport backed by `reqwest`.
///
/// Redirects are followed, so collectors that answer a POST with a redirect
/// to the actual result page work as expected.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    type Error = reqwest::Error;

    fn post_json(&self, url: &str, body: &str) -> Result<TransportReply, Self::Error> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()?;

        let status = response.status().as_u16();
        // An unreadable body is treated like an empty one.
        let body = response.text().unwrap_or_else(|err| {
            debug!(error = %err, "could not read collector reply body");
            String::new()
        });

        Ok(TransportReply { status, body })
    }
}
