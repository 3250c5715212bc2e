use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Step, TopicRatings};

/// Mean of the four topic ratings, rounded to one decimal.
///
/// Sent to the collector as a string with exactly one decimal (`"4.3"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct OverallScore(f64);

impl OverallScore {
    pub fn from_ratings(ratings: &TopicRatings) -> Self {
        let mean = f64::from(ratings.total()) / ratings.iter().count() as f64;
        // Halves round away from zero: 4.25 -> 4.3.
        Self((mean * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for OverallScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for OverallScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Share of the wizard reached, counting the current step as done.
pub fn progress_percent(step: Step) -> f64 {
    ((step.index() + 1) * 100) as f64 / Step::COUNT as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(p: u8, q: u8, b: u8, s: u8) -> OverallScore {
        OverallScore::from_ratings(&TopicRatings::new(p, q, b, s).unwrap())
    }

    #[test]
    fn default_ratings_score_four() {
        let score = OverallScore::from_ratings(&TopicRatings::default());
        assert_eq!(score.value(), 4.0);
        assert_eq!(score.to_string(), "4.0");
    }

    #[test]
    fn quarter_means_round_half_up() {
        assert_eq!(score(5, 4, 4, 4).to_string(), "4.3");
        assert_eq!(score(5, 5, 5, 4).to_string(), "4.8");
        assert_eq!(score(1, 1, 1, 2).to_string(), "1.3");
        assert_eq!(score(3, 3, 4, 4).to_string(), "3.5");
    }

    #[test]
    fn serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&score(1, 2, 3, 4)).unwrap(),
            "\"2.5\""
        );
    }

    #[test]
    fn progress() {
        assert_eq!(progress_percent(Step::Account), 20.0);
        assert_eq!(progress_percent(Step::Comments), 80.0);
        assert_eq!(progress_percent(Step::Review), 100.0);
    }

    proptest! {
        #[test]
        fn score_is_rounded_mean_within_bounds(
            p in 1u8..=5, q in 1u8..=5, b in 1u8..=5, s in 1u8..=5,
        ) {
            let score = score(p, q, b, s).value();
            let mean = f64::from(u32::from(p) + u32::from(q) + u32::from(b) + u32::from(s)) / 4.0;
            prop_assert!((1.0..=5.0).contains(&score));
            prop_assert!((score - mean).abs() <= 0.05 + f64::EPSILON);
            prop_assert_eq!(format!("{score:.1}").parse::<f64>().unwrap(), score);
        }
    }
}
