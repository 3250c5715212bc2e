use std::sync::LazyLock;

use regex::Regex;

use crate::{Field, Step, SurveyResponse};

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s()-]{7,}$").expect("phone pattern compiles")
});

static ACCOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{5,}$").expect("account pattern compiles"));

/// Feedback must be longer than this many characters once trimmed.
pub const MIN_FEEDBACK_CHARS: usize = 4;

/// Shown under an invalid phone number.
pub const PHONE_HINT: &str = "Enter at least 7 digits.";

/// Shown under an invalid account number.
pub const ACCOUNT_HINT: &str = "Use at least 5 letters or numbers.";

/// An inline hint attached to a field with an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHint {
    pub field: Field,
    pub message: &'static str,
}

/// Phone numbers are optional; when given they need at least seven digits,
/// spaces, parentheses or hyphens, with an optional leading `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.is_empty() || PHONE_PATTERN.is_match(phone)
}

/// Account numbers are optional; when given they need at least five
/// letters, digits or hyphens.
pub fn is_valid_account_number(account: &str) -> bool {
    let account = account.trim();
    account.is_empty() || ACCOUNT_PATTERN.is_match(account)
}

/// Feedback needs more than `MIN_FEEDBACK_CHARS` characters once trimmed.
/// Characters are Unicode scalar values, so one emoji counts once.
pub fn is_valid_feedback(feedback: &str) -> bool {
    feedback.trim().chars().count() > MIN_FEEDBACK_CHARS
}

/// Decide whether the respondent may move forward from `step`.
pub fn can_advance(response: &SurveyResponse, step: Step) -> bool {
    match step {
        Step::Account => {
            !response.name().trim().is_empty()
                && !response.email().trim().is_empty()
                && is_valid_phone(response.phone())
                && is_valid_account_number(response.account_number())
        }
        Step::Comments => is_valid_feedback(response.feedback()),
        Step::Service | Step::Ratings | Step::Review => true,
    }
}

/// Hints for every field whose current value breaks its format.
pub fn field_hints(response: &SurveyResponse) -> Vec<FieldHint> {
    let mut hints = Vec::new();
    if !is_valid_phone(response.phone()) {
        hints.push(FieldHint {
            field: Field::Phone,
            message: PHONE_HINT,
        });
    }
    if !is_valid_account_number(response.account_number()) {
        hints.push(FieldHint {
            field: Field::AccountNumber,
            message: ACCOUNT_HINT,
        });
    }
    hints
}
