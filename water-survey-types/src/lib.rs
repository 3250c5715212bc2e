//! Core types for the water-survey crate.
//!
//! This crate provides the presentation-agnostic parts of the survey:
//! - `SurveyResponse` - The answers of one respondent, with their defaults
//! - `Field` and `FieldValue` - Loosely typed edits as a rendering layer delivers them
//! - `Step` and `WizardState` - The five-stage wizard and its submission flags
//! - `can_advance` and friends - Pure step validation
//! - `OverallScore` and `progress_percent` - Derived metrics
//! - `Transport` - The seam for delivering a payload to the collector

mod field;
pub use field::Field;

mod field_value;
pub use field_value::FieldValue;

mod options;
pub use options::{Choice, Experience, Purpose, Topic, Zone};

mod topics;
pub use topics::{DEFAULT_RATING, RATING_MAX, RATING_MIN, TopicRatings};

mod response;
pub use response::{DEFAULT_NPS, NPS_MAX, NPS_MIN, SurveyResponse};

mod step;
pub use step::Step;

mod wizard;
pub use wizard::{Phase, WizardState};

mod validate;
pub use validate::{
    ACCOUNT_HINT, FieldHint, MIN_FEEDBACK_CHARS, PHONE_HINT, can_advance, field_hints,
    is_valid_account_number, is_valid_feedback, is_valid_phone,
};

mod metrics;
pub use metrics::{OverallScore, progress_percent};

mod review;
pub use review::{NOT_PROVIDED, ReviewRow, review_rows, thank_you_message};

mod error;
pub use error::{FieldError, GENERIC_SAVE_ERROR, MISSING_ENDPOINT_ERROR, SubmissionError};

mod traits;
pub use traits::{Transport, TransportReply};
