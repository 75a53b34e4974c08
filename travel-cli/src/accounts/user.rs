//! A user account with a wallet and trip history.

use crate::domain::{Money, Trip};

/// A registered user.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    wallet: Money,
    trips: Vec<Trip>,
}

impl User {
    /// Creates a user with the given starting balance.
    pub fn new(username: impl Into<String>, wallet: Money) -> Self {
        Self {
            username: username.into(),
            wallet,
            trips: Vec::new(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the current wallet balance.
    pub fn balance(&self) -> Money {
        self.wallet
    }

    /// Debits the wallet.
    ///
    /// Returns `true` and debits when the balance covers the amount;
    /// otherwise returns `false` and leaves the balance unchanged.
    /// Insufficient funds is an expected outcome, not an error.
    pub fn pay(&mut self, amount: Money) -> bool {
        if self.wallet >= amount {
            self.wallet = self.wallet - amount;
            true
        } else {
            false
        }
    }

    /// Appends a trip to the history.
    pub fn record_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Returns the trip history in insertion order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }
}
