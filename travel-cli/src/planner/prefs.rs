//! Selection preferences for journey planning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Comfort;

/// Which key the shortlist is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPriority {
    /// Ascending by travel time
    Time,
    /// Ascending by cost
    Cost,
}

impl fmt::Display for SortPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortPriority::Time => "time",
            SortPriority::Cost => "cost",
        };
        f.write_str(s)
    }
}

/// Preferences applied uniformly across a journey's segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyPrefs {
    /// Minimum acceptable comfort rating (inclusive).
    pub min_comfort: Comfort,

    /// Sort key for the shortlist presented per segment.
    pub priority: SortPriority,
}

impl JourneyPrefs {
    /// Creates preferences with the given threshold and priority.
    pub fn new(min_comfort: Comfort, priority: SortPriority) -> Self {
        Self {
            min_comfort,
            priority,
        }
    }
}

impl Default for JourneyPrefs {
    fn default() -> Self {
        Self {
            min_comfort: Comfort::new(3),
            priority: SortPriority::Time,
        }
    }
}
