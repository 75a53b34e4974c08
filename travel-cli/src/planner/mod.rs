//! The journey planner.
//!
//! Pure selection and aggregation logic, kept free of any I/O: callers
//! supply picks through a callback, so the whole planner is testable
//! without simulating a console.

mod prefs;
mod select;
mod summary;

pub use prefs::{JourneyPrefs, SortPriority};
pub use select::{choose, shortlist};
pub use summary::{JourneySummary, summarize};
