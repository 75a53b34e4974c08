//! Journey aggregation.
//!
//! Walks a journey's segments in order, obtains one pick per segment
//! through a caller-supplied callback, and accumulates total cost and
//! time. The callback receives the already filtered and sorted
//! shortlist; the interactive layer prompts the operator, tests pass a
//! closure.

use chrono::Duration;

use crate::domain::{Journey, Money, Segment, SelectionError, TransportOption};

use super::select::{nth, shortlist};
use super::JourneyPrefs;

/// The result of summarizing a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneySummary {
    /// Sum of the chosen options' costs, in segment order.
    pub total_cost: Money,

    /// Sum of the chosen options' travel times.
    pub total_time: Duration,

    /// The option chosen for each segment, in traversal order.
    pub choices: Vec<TransportOption>,
}

/// Summarize a journey by picking one option per segment.
///
/// Segments are visited in insertion order. For each, the shortlist is
/// computed with the same preferences, `pick` supplies a 1-indexed
/// choice, and the chosen option's cost and time are accumulated.
///
/// There is no rollback: an error on any segment discards the partial
/// totals, and already-made picks cannot be revised within the same
/// call.
///
/// # Errors
///
/// - `NoOptionsAvailable` if a segment's shortlist is empty
/// - `ChoiceOutOfRange` if `pick` returns an index outside the shortlist
/// - Any error returned by `pick` itself
pub fn summarize<F>(
    journey: &Journey,
    prefs: &JourneyPrefs,
    mut pick: F,
) -> Result<JourneySummary, SelectionError>
where
    F: FnMut(&Segment, &[TransportOption]) -> Result<usize, SelectionError>,
{
    let mut total_cost = Money::ZERO;
    let mut total_time = Duration::zero();
    let mut choices = Vec::with_capacity(journey.segments().len());

    for segment in journey.segments() {
        let shortlisted = shortlist(segment.options(), prefs);
        if shortlisted.is_empty() {
            return Err(SelectionError::NoOptionsAvailable);
        }

        let choice = pick(segment, &shortlisted)?;
        let option = nth(&shortlisted, choice)?.clone();

        total_cost += option.cost();
        total_time = total_time + option.travel_time();
        choices.push(option);
    }

    Ok(JourneySummary {
        total_cost,
        total_time,
        choices,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Comfort, StationId};
    use crate::planner::SortPriority;
    use proptest::prelude::*;

    fn option_strategy() -> impl Strategy<Value = TransportOption> {
        ("[A-Z][a-z]{2,8}", 0u32..50_000, 0i64..1440, 1u8..=5).prop_map(
            |(name, cents, mins, stars)| {
                TransportOption::new(
                    name,
                    Money::from_dollars(f64::from(cents) / 100.0),
                    Duration::minutes(mins),
                    Comfort::new(stars),
                )
            },
        )
    }

    fn journey_strategy() -> impl Strategy<Value = Journey> {
        prop::collection::vec(prop::collection::vec(option_strategy(), 1..8), 0..6).prop_map(
            |segments| {
                let mut journey = Journey::new();
                for (i, options) in segments.into_iter().enumerate() {
                    journey.push_segment(Segment::new(StationId(i), StationId(i + 1), &options));
                }
                journey
            },
        )
    }

    proptest! {
        /// Totals equal the sum of the per-segment choices, whatever
        /// (valid) picks the callback makes.
        #[test]
        fn totals_match_choices(journey in journey_strategy(), seed in 1usize..100) {
            // Comfort 1 keeps every option, so no segment can be empty.
            let prefs = JourneyPrefs::new(Comfort::new(1), SortPriority::Cost);

            let result = summarize(&journey, &prefs, |_, listed| Ok(1 + seed % listed.len()));
            let summary = result.unwrap();

            prop_assert_eq!(summary.choices.len(), journey.segments().len());

            let expected_cost: Money = summary.choices.iter().map(|o| o.cost()).sum();
            let expected_time = summary
                .choices
                .iter()
                .fold(Duration::zero(), |acc, o| acc + o.travel_time());

            prop_assert_eq!(summary.total_cost, expected_cost);
            prop_assert_eq!(summary.total_time, expected_time);
        }
    }
}
