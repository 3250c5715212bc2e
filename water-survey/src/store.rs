use tracing::{debug, info, warn};

use crate::{
    Field, FieldError, FieldHint, FieldValue, HttpTransport, OverallScore, Phase, ReviewRow,
    Step, SubmissionClient, SubmissionError, SurveyResponse, Topic, Transport, WizardState,
    can_advance, field_hints, progress_percent, review_rows, thank_you_message,
};

/// Outcome of a forward navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step.
    Moved(Step),

    /// The current step is not valid yet; nothing changed.
    Blocked,

    /// A submission is in flight; nothing changed and nothing was sent.
    Busy,

    /// The collector accepted the response.
    Submitted,

    /// The submission failed; `save_error` is set and the review step stays.
    SaveFailed,

    /// The survey was already submitted; nothing changed.
    AlreadySubmitted,
}

/// A submission that has been started but not yet sent.
///
/// Holds the answers as they were when the respondent pressed submit.
#[derive(Debug)]
#[must_use = "a started submission must be completed"]
pub struct PendingSubmission {
    response: SurveyResponse,
    overall_score: OverallScore,
}

impl PendingSubmission {
    pub fn response(&self) -> &SurveyResponse {
        &self.response
    }

    pub fn overall_score(&self) -> OverallScore {
        self.overall_score
    }
}

/// Everything a rendering layer needs to draw the survey.
///
/// Derived values are computed when the view is taken and never stored.
#[derive(Debug, Clone)]
pub struct SurveyView {
    pub response: SurveyResponse,
    pub wizard: WizardState,
    pub phase: Phase,
    pub overall_score: OverallScore,
    pub progress_percent: f64,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub hints: Vec<FieldHint>,
    pub primary_action: &'static str,
    pub revision: u64,
}

impl SurveyView {
    /// The hint for a field, if its value is invalid.
    pub fn hint(&self, field: Field) -> Option<&'static str> {
        self.hints
            .iter()
            .find(|hint| hint.field == field)
            .map(|hint| hint.message)
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        review_rows(&self.response, self.overall_score)
    }

    pub fn thank_you_message(&self) -> String {
        thank_you_message(&self.response, self.overall_score)
    }
}

/// Owner of one survey session.
///
/// The store is the single source of truth for the answers and the wizard
/// state. Every mutation either applies completely or is rejected, and each
/// applied change bumps `revision`.
#[derive(Debug)]
pub struct SurveyStore<T = HttpTransport> {
    response: SurveyResponse,
    wizard: WizardState,
    revision: u64,
    last_failure: Option<SubmissionError>,
    client: SubmissionClient<T>,
}

impl<T: Transport> SurveyStore<T> {
    /// Start a session with default answers on the first step.
    pub fn new(client: SubmissionClient<T>) -> Self {
        Self {
            response: SurveyResponse::default(),
            wizard: WizardState::default(),
            revision: 0,
            last_failure: None,
            client,
        }
    }

    pub fn response(&self) -> &SurveyResponse {
        &self.response
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn step(&self) -> Step {
        self.wizard.step
    }

    pub fn client(&self) -> &SubmissionClient<T> {
        &self.client
    }

    /// Counter bumped on every applied change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The raw cause of the last failed submission.
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    pub fn overall_score(&self) -> OverallScore {
        OverallScore::from_ratings(self.response.topics())
    }

    /// Whether the current step allows moving forward.
    pub fn can_advance(&self) -> bool {
        can_advance(&self.response, self.wizard.step)
    }

    pub fn view(&self) -> SurveyView {
        SurveyView {
            response: self.response.clone(),
            wizard: self.wizard.clone(),
            phase: self.wizard.phase(),
            overall_score: self.overall_score(),
            progress_percent: progress_percent(self.wizard.step),
            can_advance: self.can_advance() && !self.wizard.is_saving && !self.wizard.submitted,
            can_go_back: self.wizard.can_go_back(),
            hints: field_hints(&self.response),
            primary_action: self.wizard.primary_action_label(),
            revision: self.revision,
        }
    }

    /// Replace one top-level field.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), FieldError> {
        self.ensure_editable()?;
        let next = self.response.with_field(field, value)?;
        debug!(%field, revision = self.revision + 1, "field updated");
        self.replace_response(next);
        Ok(())
    }

    /// Replace one topic rating.
    pub fn update_topic(&mut self, topic: Topic, rating: u8) -> Result<(), FieldError> {
        self.ensure_editable()?;
        let next = self.response.with_topic(topic, rating)?;
        debug!(%topic, rating, revision = self.revision + 1, "topic rated");
        self.replace_response(next);
        Ok(())
    }

    /// Move forward one step, or submit on the review step.
    ///
    /// Submitting blocks until the collector answered.
    pub fn advance(&mut self) -> Advance {
        if let Some(rejected) = self.forward_rejection() {
            return rejected;
        }
        match self.wizard.step.next() {
            Some(next) => {
                debug!(from = %self.wizard.step, to = %next, "advanced");
                self.wizard.step = next;
                self.bump();
                Advance::Moved(next)
            }
            None => match self.begin_submission() {
                Some(pending) => self.complete_submission(pending),
                None => Advance::Blocked,
            },
        }
    }

    /// Move back one step. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        if self.wizard.submitted {
            return false;
        }
        let Some(prev) = self.wizard.step.prev() else {
            return false;
        };
        debug!(from = %self.wizard.step, to = %prev, "went back");
        self.wizard.step = prev;
        self.bump();
        true
    }

    /// Restore the default answers and return to the first step.
    ///
    /// Ignored while a submission is in flight.
    pub fn reset(&mut self) -> bool {
        if self.wizard.is_saving {
            return false;
        }
        debug!("survey reset");
        self.response = SurveyResponse::default();
        self.wizard = WizardState::default();
        self.last_failure = None;
        self.bump();
        true
    }

    /// Start submitting from the review step.
    ///
    /// Marks the session as saving and clears the previous error. Returns
    /// `None` when not on a valid review step, already saving, or already
    /// submitted.
    pub fn begin_submission(&mut self) -> Option<PendingSubmission> {
        if self.forward_rejection().is_some() || !self.wizard.step.is_last() {
            return None;
        }
        self.wizard.is_saving = true;
        self.wizard.save_error = None;
        self.bump();
        info!(revision = self.revision, "submitting survey response");
        Some(PendingSubmission {
            response: self.response.clone(),
            overall_score: self.overall_score(),
        })
    }

    /// Send a started submission and record the outcome.
    pub fn complete_submission(&mut self, pending: PendingSubmission) -> Advance {
        let result = self
            .client
            .submit(&pending.response, pending.overall_score);
        self.wizard.is_saving = false;

        let outcome = match result {
            Ok(()) => {
                info!(score = %pending.overall_score, "survey response saved");
                self.wizard.submitted = true;
                self.last_failure = None;
                Advance::Submitted
            }
            Err(err) => {
                warn!(error = %err, network = err.is_network(), "survey response not saved");
                self.wizard.save_error = Some(err.user_message().to_string());
                self.last_failure = Some(err);
                Advance::SaveFailed
            }
        };
        self.bump();
        outcome
    }

    fn forward_rejection(&self) -> Option<Advance> {
        if self.wizard.submitted {
            Some(Advance::AlreadySubmitted)
        } else if self.wizard.is_saving {
            Some(Advance::Busy)
        } else if !self.can_advance() {
            Some(Advance::Blocked)
        } else {
            None
        }
    }

    fn ensure_editable(&self) -> Result<(), FieldError> {
        if self.wizard.submitted {
            Err(FieldError::Locked)
        } else {
            Ok(())
        }
    }

    fn replace_response(&mut self, next: SurveyResponse) {
        self.response = next;
        self.bump();
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
