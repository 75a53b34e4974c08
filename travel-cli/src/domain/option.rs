//! Transport options and comfort ratings.

use std::fmt;

use chrono::Duration;

use super::Money;

/// A comfort rating in stars.
///
/// Also used as the *threshold* when filtering options, in which case
/// it may exceed every option's rating (an empty shortlist is a valid,
/// handled outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Comfort(u8);

impl Comfort {
    /// Creates a comfort rating of the given number of stars.
    pub fn new(stars: u8) -> Self {
        Comfort(stars)
    }

    /// Returns the rating in stars.
    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Comfort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stars", self.0)
    }
}

/// A named mode of transport with cost, duration, and comfort rating.
///
/// Immutable once created: there are no mutators, and segments take
/// snapshot copies at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportOption {
    name: String,
    cost: Money,
    travel_time: Duration,
    comfort: Comfort,
}

impl TransportOption {
    /// Creates a new transport option.
    pub fn new(
        name: impl Into<String>,
        cost: Money,
        travel_time: Duration,
        comfort: Comfort,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            travel_time,
            comfort,
        }
    }

    /// Returns the option's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fare for this option.
    pub fn cost(&self) -> Money {
        self.cost
    }

    /// Returns the travel time.
    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }

    /// Returns the comfort rating.
    pub fn comfort(&self) -> Comfort {
        self.comfort
    }
}

impl fmt::Display for TransportOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Cost: {}, Time: {}, Comfort: {}",
            self.name,
            self.cost,
            format_hours(self.travel_time),
            self.comfort
        )
    }
}

/// Formats a duration in hours, e.g. `"3 hrs"` or `"2.5 hrs"`.
pub fn format_hours(duration: Duration) -> String {
    let mins = duration.num_minutes();
    if mins % 60 == 0 {
        format!("{} hrs", mins / 60)
    } else {
        format!("{:.1} hrs", mins as f64 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(name: &str, dollars: f64, hours: i64, stars: u8) -> TransportOption {
        TransportOption::new(
            name,
            Money::from_dollars(dollars),
            Duration::hours(hours),
            Comfort::new(stars),
        )
    }

    #[test]
    fn comfort_ordering() {
        assert!(Comfort::new(4) >= Comfort::new(3));
        assert!(Comfort::new(2) < Comfort::new(5));
        assert_eq!(Comfort::new(3), Comfort::new(3));
    }

    #[test]
    fn comfort_display() {
        assert_eq!(Comfort::new(4).to_string(), "4 stars");
    }

    #[test]
    fn option_accessors() {
        let bus = opt("Bus", 50.0, 5, 3);

        assert_eq!(bus.name(), "Bus");
        assert_eq!(bus.cost(), Money::from_dollars(50.0));
        assert_eq!(bus.travel_time(), Duration::hours(5));
        assert_eq!(bus.comfort(), Comfort::new(3));
    }

    #[test]
    fn option_display() {
        let train = opt("Train", 80.0, 3, 4);
        assert_eq!(
            train.to_string(),
            "Train | Cost: $80.00, Time: 3 hrs, Comfort: 4 stars"
        );
    }

    #[test]
    fn fractional_hours() {
        assert_eq!(format_hours(Duration::minutes(90)), "1.5 hrs");
        assert_eq!(format_hours(Duration::minutes(60)), "1 hrs");
        assert_eq!(format_hours(Duration::zero()), "0 hrs");
    }
}
