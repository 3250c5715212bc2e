use serde::Serialize;

use crate::{Choice, Field, FieldError, Topic};

/// Lowest rating a topic can receive.
pub const RATING_MIN: u8 = 1;

/// Highest rating a topic can receive.
pub const RATING_MAX: u8 = 5;

/// Rating every topic starts with.
pub const DEFAULT_RATING: u8 = 4;

/// Ratings for the four fixed service topics.
///
/// The four keys are struct fields, so a rating can never be missing or
/// duplicated. Ratings are kept in `RATING_MIN..=RATING_MAX` by every
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicRatings {
    pressure: u8,
    quality: u8,
    billing: u8,
    support: u8,
}

impl Default for TopicRatings {
    fn default() -> Self {
        Self {
            pressure: DEFAULT_RATING,
            quality: DEFAULT_RATING,
            billing: DEFAULT_RATING,
            support: DEFAULT_RATING,
        }
    }
}

impl TopicRatings {
    /// Create ratings from the four values in `Topic::ALL` order.
    pub fn new(pressure: u8, quality: u8, billing: u8, support: u8) -> Result<Self, FieldError> {
        Self::default()
            .with(Topic::Pressure, pressure)?
            .with(Topic::Quality, quality)?
            .with(Topic::Billing, billing)?
            .with(Topic::Support, support)
    }

    /// Get the rating for one topic.
    pub fn get(&self, topic: Topic) -> u8 {
        match topic {
            Topic::Pressure => self.pressure,
            Topic::Quality => self.quality,
            Topic::Billing => self.billing,
            Topic::Support => self.support,
        }
    }

    /// Return a copy with one rating replaced.
    pub fn with(mut self, topic: Topic, rating: u8) -> Result<Self, FieldError> {
        check_rating(rating)?;
        let slot = match topic {
            Topic::Pressure => &mut self.pressure,
            Topic::Quality => &mut self.quality,
            Topic::Billing => &mut self.billing,
            Topic::Support => &mut self.support,
        };
        *slot = rating;
        Ok(self)
    }

    /// Iterate over all topics with their ratings.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, u8)> + '_ {
        Topic::ALL.iter().map(|topic| (*topic, self.get(*topic)))
    }

    /// Sum of all four ratings.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, rating)| u32::from(rating)).sum()
    }
}

fn check_rating(rating: u8) -> Result<(), FieldError> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(FieldError::OutOfRange {
            field: Field::Topics,
            value: i64::from(rating),
            min: i64::from(RATING_MIN),
            max: i64::from(RATING_MAX),
        })
    }
}
