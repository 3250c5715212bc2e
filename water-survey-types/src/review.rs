use crate::{Choice, NPS_MAX, OverallScore, RATING_MAX, SurveyResponse};

/// Shown in place of an optional answer that was left empty.
pub const NOT_PROVIDED: &str = "Not provided";

/// One line of the review summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
}

impl ReviewRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

fn or_not_provided(value: &str) -> String {
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

/// The summary shown on the review step, in display order.
pub fn review_rows(response: &SurveyResponse, score: OverallScore) -> Vec<ReviewRow> {
    vec![
        ReviewRow::new("Name", response.name()),
        ReviewRow::new("Email", response.email()),
        ReviewRow::new("Phone", or_not_provided(response.phone())),
        ReviewRow::new("Account number", or_not_provided(response.account_number())),
        ReviewRow::new("Service zone", response.zone().as_str()),
        ReviewRow::new("Purpose", response.purpose().as_str()),
        ReviewRow::new("Experience", response.experience().label()),
        ReviewRow::new(
            "Recommendation score",
            format!("{} / {NPS_MAX}", response.nps()),
        ),
        ReviewRow::new("Overall satisfaction", format!("{score} / {RATING_MAX}")),
        ReviewRow::new("Feedback", response.feedback()),
    ]
}

/// Text shown once the collector accepted the response.
pub fn thank_you_message(response: &SurveyResponse, score: OverallScore) -> String {
    format!(
        "Thanks for your feedback, {}!\n\nWe have recorded your responses and will share \
         improvements with our service team. Your overall satisfaction score: {score} / {RATING_MAX}",
        response.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn optional_answers_show_placeholder() {
        let response = SurveyResponse::new()
            .with_field(Field::Name, "Avery")
            .unwrap();
        let score = OverallScore::from_ratings(response.topics());
        let rows = review_rows(&response, score);

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], ReviewRow::new("Name", "Avery"));
        assert_eq!(rows[2].value, NOT_PROVIDED);
        assert_eq!(rows[3].value, NOT_PROVIDED);
        assert_eq!(rows[6].value, "Good");
        assert_eq!(rows[7].value, "8 / 10");
        assert_eq!(rows[8].value, "4.0 / 5");
    }

    #[test]
    fn thank_you_names_respondent() {
        let response = SurveyResponse::new()
            .with_field(Field::Name, "Avery")
            .unwrap();
        let message = thank_you_message(&response, OverallScore::from_ratings(response.topics()));
        assert!(message.starts_with("Thanks for your feedback, Avery!"));
        assert!(message.ends_with("4.0 / 5"));
    }
}
