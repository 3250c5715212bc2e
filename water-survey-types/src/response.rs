use serde::Serialize;

use crate::{
    Choice, Experience, Field, FieldError, FieldValue, Purpose, Topic, TopicRatings, Zone,
};

/// Lowest recommendation score.
pub const NPS_MIN: u8 = 1;

/// Highest recommendation score.
pub const NPS_MAX: u8 = 10;

/// Recommendation score a fresh response starts with.
pub const DEFAULT_NPS: u8 = 8;

/// The answers of one respondent.
///
/// A response is a value: edits never happen in place. `with_field` and
/// `with_topic` return a new response or reject the edit, so a caller either
/// sees the whole change or none of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    name: String,
    email: String,
    phone: String,
    account_number: String,
    zone: Zone,
    purpose: Purpose,
    experience: Experience,
    nps: u8,
    topics: TopicRatings,
    feedback: String,
    follow_up: bool,
}

impl Default for SurveyResponse {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            account_number: String::new(),
            zone: Zone::default(),
            purpose: Purpose::default(),
            experience: Experience::default(),
            nps: DEFAULT_NPS,
            topics: TopicRatings::default(),
            feedback: String::new(),
            follow_up: true,
        }
    }
}

impl SurveyResponse {
    /// Create a response holding the default answers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    pub fn nps(&self) -> u8 {
        self.nps
    }

    pub fn topics(&self) -> &TopicRatings {
        &self.topics
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn follow_up(&self) -> bool {
        self.follow_up
    }

    /// Get the current value of a field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => self.name.as_str().into(),
            Field::Email => self.email.as_str().into(),
            Field::Phone => self.phone.as_str().into(),
            Field::AccountNumber => self.account_number.as_str().into(),
            Field::Zone => self.zone.as_str().into(),
            Field::Purpose => self.purpose.as_str().into(),
            Field::Experience => self.experience.as_str().into(),
            Field::Nps => self.nps.into(),
            Field::Topics => self.topics.into(),
            Field::Feedback => self.feedback.as_str().into(),
            Field::FollowUp => self.follow_up.into(),
        }
    }

    /// Return a copy with one top-level field replaced.
    ///
    /// The value must have the field's type and lie in its domain: option
    /// fields take the wire value of one of their options, `nps` takes an
    /// integer in `NPS_MIN..=NPS_MAX`.
    pub fn with_field(&self, field: Field, value: impl Into<FieldValue>) -> Result<Self, FieldError> {
        let value = value.into();
        let mut next = self.clone();
        match field {
            Field::Name => next.name = expect_text(field, value)?,
            Field::Email => next.email = expect_text(field, value)?,
            Field::Phone => next.phone = expect_text(field, value)?,
            Field::AccountNumber => next.account_number = expect_text(field, value)?,
            Field::Feedback => next.feedback = expect_text(field, value)?,
            Field::Zone => next.zone = Zone::parse(&expect_text(field, value)?)?,
            Field::Purpose => next.purpose = Purpose::parse(&expect_text(field, value)?)?,
            Field::Experience => {
                next.experience = Experience::parse(&expect_text(field, value)?)?;
            }
            Field::Nps => next.nps = expect_nps(value)?,
            Field::Topics => {
                next.topics = value.as_ratings().ok_or_else(|| mismatch(field, "Ratings", &value))?;
            }
            Field::FollowUp => {
                next.follow_up = value.as_bool().ok_or_else(|| mismatch(field, "Bool", &value))?;
            }
        }
        Ok(next)
    }

    /// Return a copy with one topic rating replaced.
    pub fn with_topic(&self, topic: Topic, rating: u8) -> Result<Self, FieldError> {
        let topics = self.topics.with(topic, rating)?;
        Ok(Self {
            topics,
            ..self.clone()
        })
    }
}

fn mismatch(field: Field, expected: &'static str, actual: &FieldValue) -> FieldError {
    FieldError::TypeMismatch {
        field,
        expected,
        actual: actual.type_name(),
    }
}

fn expect_text(field: Field, value: FieldValue) -> Result<String, FieldError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(mismatch(field, "Text", &other)),
    }
}

fn expect_nps(value: FieldValue) -> Result<u8, FieldError> {
    let score = value
        .as_int()
        .ok_or_else(|| mismatch(Field::Nps, "Int", &value))?;
    u8::try_from(score)
        .ok()
        .filter(|nps| (NPS_MIN..=NPS_MAX).contains(nps))
        .ok_or(FieldError::OutOfRange {
            field: Field::Nps,
            value: score,
            min: i64::from(NPS_MIN),
            max: i64::from(NPS_MAX),
        })
}
