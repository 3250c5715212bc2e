use crate::TopicRatings;

/// A value delivered by a rendering layer for one `Field`.
///
/// Values are loosely typed on purpose: a text box hands over a string, a
/// scale hands over an integer. `SurveyResponse::with_field` checks the value
/// against the field before anything is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A string value (free text, or the wire value of an option).
    Text(String),

    /// An integer value (the recommendation score).
    Int(i64),

    /// A boolean value (the follow-up consent).
    Bool(bool),

    /// A complete set of topic ratings.
    Ratings(TopicRatings),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as topic ratings.
    pub fn as_ratings(&self) -> Option<TopicRatings> {
        match self {
            Self::Ratings(r) => Some(*r),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Int(_) => "Int",
            Self::Bool(_) => "Bool",
            Self::Ratings(_) => "Ratings",
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u8> for FieldValue {
    fn from(i: u8) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<TopicRatings> for FieldValue {
    fn from(ratings: TopicRatings) -> Self {
        Self::Ratings(ratings)
    }
}
