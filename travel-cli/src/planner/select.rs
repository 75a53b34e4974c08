//! Option selection for a single segment.
//!
//! Filters a segment's options by comfort threshold, sorts by the
//! preferred key, and resolves a 1-indexed pick into a concrete option.

use crate::domain::{SelectionError, TransportOption};

use super::{JourneyPrefs, SortPriority};

/// Filter and sort a segment's options.
///
/// Keeps exactly the options with `comfort >= prefs.min_comfort`, then
/// sorts ascending by travel time or cost per `prefs.priority`. The
/// sort is stable: options with equal keys keep their original relative
/// order.
pub fn shortlist(options: &[TransportOption], prefs: &JourneyPrefs) -> Vec<TransportOption> {
    let mut kept: Vec<TransportOption> = options
        .iter()
        .filter(|opt| opt.comfort() >= prefs.min_comfort)
        .cloned()
        .collect();

    match prefs.priority {
        SortPriority::Time => kept.sort_by(|a, b| a.travel_time().cmp(&b.travel_time())),
        SortPriority::Cost => kept.sort_by(|a, b| a.cost().total_cmp(&b.cost())),
    }

    kept
}

/// Resolve a 1-indexed pick against a shortlist.
pub(super) fn nth(
    shortlist: &[TransportOption],
    choice: usize,
) -> Result<&TransportOption, SelectionError> {
    if choice == 0 || choice > shortlist.len() {
        return Err(SelectionError::ChoiceOutOfRange {
            choice,
            available: shortlist.len(),
        });
    }
    Ok(&shortlist[choice - 1])
}

/// Choose one option from a segment's options.
///
/// Computes the shortlist and returns the option at the 1-indexed
/// `choice` position within it.
///
/// # Errors
///
/// - `NoOptionsAvailable` if nothing meets the comfort threshold
/// - `ChoiceOutOfRange` if `choice` is not in `1..=shortlist.len()`
pub fn choose(
    options: &[TransportOption],
    prefs: &JourneyPrefs,
    choice: usize,
) -> Result<TransportOption, SelectionError> {
    let shortlisted = shortlist(options, prefs);
    if shortlisted.is_empty() {
        return Err(SelectionError::NoOptionsAvailable);
    }
    nth(&shortlisted, choice).cloned()
}
