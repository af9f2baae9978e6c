//! Posting cadence: publish weekdays and plan duration.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{Date, Weekday},
    Span, ToSpan,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CadenceError, Result};

/// Returns the weekday index used throughout the planner: 0 = Sunday through
/// 6 = Saturday.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.to_sunday_zero_offset() as u8
}

/// Set of weekdays on which posts may be scheduled.
///
/// Stored as a bit set indexed by [`weekday_index`], so iteration is always
/// in Sunday-first order regardless of the order the days were supplied in.
///
/// ```rust
/// use cadence_core::models::PublishDays;
///
/// let days = PublishDays::from_indices([5, 1]).unwrap();
/// assert_eq!(days.indices(), vec![1, 5]);
/// assert_eq!(days.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PublishDays(u8);

impl PublishDays {
    /// Highest valid weekday index (Saturday).
    pub const MAX_INDEX: u8 = 6;

    /// Builds a set from weekday indices, rejecting out-of-range values and
    /// duplicates.
    pub fn from_indices<I>(indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut bits = 0u8;
        for index in indices {
            if index > Self::MAX_INDEX {
                return Err(CadenceError::invalid_input("publish_days")
                    .with_reason(format!("weekday index {index} is outside 0..=6")));
            }
            let bit = 1 << index;
            if bits & bit != 0 {
                return Err(CadenceError::invalid_input("publish_days")
                    .with_reason(format!("weekday index {index} is listed twice")));
            }
            bits |= bit;
        }
        Ok(Self(bits))
    }

    /// Whether the given weekday index is part of the set.
    pub fn contains_index(&self, index: u8) -> bool {
        index <= Self::MAX_INDEX && self.0 & (1 << index) != 0
    }

    /// Whether the given weekday is part of the set.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.contains_index(weekday_index(weekday))
    }

    /// Number of weekdays in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Weekday indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..=Self::MAX_INDEX)
            .filter(|index| self.contains_index(*index))
            .collect()
    }
}

impl Serialize for PublishDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.indices().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublishDays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let indices = Vec::<u8>::deserialize(deserializer)?;
        PublishDays::from_indices(indices).map_err(serde::de::Error::custom)
    }
}

/// Length of the scheduling window that starts at a plan's start date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum PlanDuration {
    /// Fourteen days
    TwoWeeks,

    /// One calendar month
    #[default]
    OneMonth,

    /// Two calendar months
    TwoMonths,

    /// Three calendar months
    ThreeMonths,
}

impl PlanDuration {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDuration::TwoWeeks => "two_weeks",
            PlanDuration::OneMonth => "one_month",
            PlanDuration::TwoMonths => "two_months",
            PlanDuration::ThreeMonths => "three_months",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PlanDuration::TwoWeeks => "2 weeks",
            PlanDuration::OneMonth => "1 month",
            PlanDuration::TwoMonths => "2 months",
            PlanDuration::ThreeMonths => "3 months",
        }
    }

    /// The duration as a calendar span.
    pub fn span(&self) -> Span {
        match self {
            PlanDuration::TwoWeeks => 14.days(),
            PlanDuration::OneMonth => 1.month(),
            PlanDuration::TwoMonths => 2.months(),
            PlanDuration::ThreeMonths => 3.months(),
        }
    }

    /// Last day (inclusive) of a window starting at `start`.
    ///
    /// Month arithmetic clamps to the last valid day of the target month, so
    /// January 31 plus one month is the last day of February. A window that
    /// would run past the supported calendar ends at [`Date::MAX`].
    pub fn window_end(&self, start: Date) -> Date {
        start.checked_add(self.span()).unwrap_or(Date::MAX)
    }
}

impl FromStr for PlanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "two_weeks" | "2weeks" => Ok(PlanDuration::TwoWeeks),
            "one_month" | "1month" => Ok(PlanDuration::OneMonth),
            "two_months" | "2months" => Ok(PlanDuration::TwoMonths),
            "three_months" | "3months" => Ok(PlanDuration::ThreeMonths),
            _ => Err(format!("Invalid plan duration: {s}")),
        }
    }
}

impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
