//! Recorded trips.

use std::fmt;

use super::Money;

/// Lifecycle state of a recorded trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    /// Planned but not yet paid for
    Planned,
    /// Paid in full
    Paid,
    /// Cancelled by the user
    Cancelled,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TripStatus::Planned => "Planned",
            TripStatus::Paid => "Paid",
            TripStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// A single entry in a user's trip history.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: String,
    origin: String,
    destination: String,
    status: TripStatus,
    cost: Money,
}

impl Trip {
    /// Creates a trip record.
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        status: TripStatus,
        cost: Money,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            status,
            cost,
        }
    }

    /// Returns the trip identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the origin station name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination station name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the trip status.
    pub fn status(&self) -> TripStatus {
        self.status
    }

    /// Returns the total cost of the trip.
    pub fn cost(&self) -> Money {
        self.cost
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, From: {} to {}, Status: {}, Cost: {}",
            self.id, self.origin, self.destination, self.status, self.cost
        )
    }
}
