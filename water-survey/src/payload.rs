use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::{OverallScore, SurveyResponse};

/// The JSON document sent to the collector.
///
/// All response fields sit at the top level next to `overallScore` and
/// `submittedAt`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload<'a> {
    #[serde(flatten)]
    response: &'a SurveyResponse,
    overall_score: OverallScore,
    #[serde(serialize_with = "iso_millis")]
    submitted_at: DateTime<Utc>,
}

impl<'a> SubmissionPayload<'a> {
    pub fn new(
        response: &'a SurveyResponse,
        overall_score: OverallScore,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            response,
            overall_score,
            submitted_at,
        }
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn iso_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
