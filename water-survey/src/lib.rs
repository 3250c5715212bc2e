//! # water-survey
//!
//! Customer-satisfaction survey for a water utility, collected in five steps
//! and delivered to a spreadsheet-backed collector as one JSON document.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use water_survey::{Advance, CollectorConfig, Field, SubmissionClient, SurveyStore};
//!
//! let client = SubmissionClient::http(CollectorConfig::new(endpoint))?;
//! let mut store = SurveyStore::new(client);
//!
//! store.update_field(Field::Name, "Avery Johnson")?;
//! store.update_field(Field::Email, "avery@email.com")?;
//! assert!(matches!(store.advance(), Advance::Moved(_)));
//! ```
//!
//! ## Parts
//!
//! - `SurveyStore` - Owns the answers and the wizard state; the only place
//!   that mutates them
//! - `SubmissionClient` - Builds the payload and performs one exchange with
//!   the collector
//! - `HttpTransport` - Blocking `reqwest` transport
//! - `TestTransport` - Scripted transport for tests

// Re-export all types from water-survey-types
pub use water_survey_types::*;

mod config;
pub use config::{CollectorConfig, DEFAULT_TIMEOUT, ENDPOINT_PLACEHOLDER};

mod payload;
pub use payload::SubmissionPayload;

mod reply;
pub use reply::{CollectorReply, DEFAULT_APPLICATION_ERROR};

mod client;
pub use client::SubmissionClient;

mod http;
pub use http::HttpTransport;

mod store;
pub use store::{Advance, PendingSubmission, SurveyStore, SurveyView};

// Test transport for exercising submissions without a collector
mod test_transport;
pub use test_transport::{RecordedRequest, TestTransport, TestTransportError};
