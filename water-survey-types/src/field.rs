use std::fmt;
use std::str::FromStr;

use crate::FieldError;

/// A top-level field of a `SurveyResponse`.
///
/// The key of each field is the name it carries in the submitted JSON
/// document, e.g. `Field::AccountNumber` is sent as `"accountNumber"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    AccountNumber,
    Zone,
    Purpose,
    Experience,
    Nps,
    Topics,
    Feedback,
    FollowUp,
}

impl Field {
    /// All fields, in payload order.
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::AccountNumber,
        Field::Zone,
        Field::Purpose,
        Field::Experience,
        Field::Nps,
        Field::Topics,
        Field::Feedback,
        Field::FollowUp,
    ];

    /// The key used for this field in the JSON payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::AccountNumber => "accountNumber",
            Self::Zone => "zone",
            Self::Purpose => "purpose",
            Self::Experience => "experience",
            Self::Nps => "nps",
            Self::Topics => "topics",
            Self::Feedback => "feedback",
            Self::FollowUp => "followUp",
        }
    }

    /// The label shown next to the control for this field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::AccountNumber => "Account number",
            Self::Zone => "Service zone",
            Self::Purpose => "Purpose of contact",
            Self::Experience => "How would you rate your water service overall?",
            Self::Nps => "How likely are you to recommend our utility service?",
            Self::Topics => "Rate each part of your water service",
            Self::Feedback => "What could we improve?",
            Self::FollowUp => "It's okay to contact me about my feedback",
        }
    }

    /// Whether the field holds free text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Phone | Self::AccountNumber | Self::Feedback
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_camel_case() {
        assert_eq!(Field::AccountNumber.key(), "accountNumber");
        assert_eq!(Field::FollowUp.key(), "followUp");
    }

    #[test]
    fn parse_round_trips_every_key() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn parse_unknown() {
        let result = "account_number".parse::<Field>();
        assert!(matches!(result, Err(FieldError::UnknownField(key)) if key == "account_number"));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Field::Nps), "nps");
    }
}
