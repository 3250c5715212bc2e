//! Terminal wizard for the water utility satisfaction survey.
//!
//! ```rust,ignore
//! use water_survey::{CollectorConfig, SubmissionClient, SurveyStore};
//! use water_survey_ratatui::RatatuiSurvey;
//!
//! let mut store = SurveyStore::new(SubmissionClient::http(CollectorConfig::new(endpoint))?);
//! let saved = RatatuiSurvey::new().with_title("Tell us how we did").run(&mut store)?;
//! ```

mod backend;
mod draw;
mod input;

pub use backend::{RatatuiError, RatatuiSurvey, Theme};
pub use input::{Control, UiCommand, WizardUi, controls};
