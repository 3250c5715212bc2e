use crate::Step;

/// Where the wizard currently is, derived from `WizardState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The respondent is answering the given step. A failed submission
    /// returns here with `save_error` set.
    Editing(Step),

    /// The payload is on its way to the collector.
    Submitting,

    /// The collector accepted the response. Only `reset` leaves this phase.
    Submitted,
}

/// Navigation and submission flags of one survey session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// The step currently shown.
    pub step: Step,

    /// Terminal flag, set after a successful submission.
    pub submitted: bool,

    /// Set while a submission is in flight.
    pub is_saving: bool,

    /// User-facing message of the last failed submission.
    pub save_error: Option<String>,
}

impl WizardState {
    pub fn phase(&self) -> Phase {
        if self.submitted {
            Phase::Submitted
        } else if self.is_saving {
            Phase::Submitting
        } else {
            Phase::Editing(self.step)
        }
    }

    /// Caption of the primary (forward) action.
    pub fn primary_action_label(&self) -> &'static str {
        match (self.step.is_last(), self.is_saving) {
            (false, _) => "Continue",
            (true, false) => "Submit survey",
            (true, true) => "Saving...",
        }
    }

    /// Whether the back action is available.
    pub fn can_go_back(&self) -> bool {
        !self.submitted && self.step.prev().is_some()
    }
}
