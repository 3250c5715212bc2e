use std::fmt;

use crate::Field;

/// One stage of the five-step survey wizard.
///
/// Steps form a fixed linear sequence; navigation moves one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Account,
    Service,
    Ratings,
    Comments,
    Review,
}

impl Step {
    /// All steps, in order.
    pub const ALL: [Step; 5] = [
        Step::Account,
        Step::Service,
        Step::Ratings,
        Step::Comments,
        Step::Review,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position of this step.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a step by its zero-based position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The step after this one, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The step before this one, if any.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Whether this is the last (submission) step.
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Service => "Service",
            Self::Ratings => "Ratings",
            Self::Comments => "Comments",
            Self::Review => "Review",
        }
    }

    /// Caption such as `Step 2 of 5: Service`.
    pub fn caption(self) -> String {
        format!(
            "Step {} of {}: {}",
            self.index() + 1,
            Self::COUNT,
            self.label()
        )
    }

    /// Fields the respondent edits on this step, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Account => &[
                Field::Name,
                Field::Phone,
                Field::AccountNumber,
                Field::Email,
                Field::Zone,
                Field::Purpose,
            ],
            Self::Service => &[Field::Experience, Field::Nps],
            Self::Ratings => &[Field::Topics],
            Self::Comments => &[Field::Feedback, Field::FollowUp],
            Self::Review => &[],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
