//! Run the survey wizard without a collector.
//!
//! Responses go to a `TestTransport` and are printed on exit instead of being
//! posted anywhere.
//!
//! Run with: cargo run -p water-survey-ratatui --example offline

use water_survey::{CollectorConfig, SubmissionClient, SurveyStore, TestTransport};
use water_survey_ratatui::{RatatuiError, RatatuiSurvey};

fn main() -> anyhow::Result<()> {
    let transport = TestTransport::new();
    let client = SubmissionClient::new(
        CollectorConfig::new("http://localhost/offline"),
        transport.clone(),
    );
    let mut store = SurveyStore::new(client);

    match RatatuiSurvey::new()
        .with_title("Water Survey (offline)")
        .run(&mut store)
    {
        Ok(_) | Err(RatatuiError::Cancelled) => {}
        Err(err) => return Err(err.into()),
    }

    println!("\n=== Recorded Responses ===");
    for request in transport.requests() {
        println!("{}", serde_json::to_string_pretty(&request.json()?)?);
    }

    Ok(())
}
