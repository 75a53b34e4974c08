//! Domain types for the travel booking CLI.
//!
//! This module contains the core domain model: money and comfort value
//! types, transport options, the station network, and journeys built
//! from segments. Types enforce their invariants at construction time,
//! so code that receives them can trust their validity.

mod error;
mod journey;
mod money;
mod option;
mod segment;
mod station;
mod trip;

pub use error::SelectionError;
pub use journey::Journey;
pub use money::Money;
pub use option::{Comfort, TransportOption, format_hours};
pub use segment::Segment;
pub use station::{Network, Station, StationId};
pub use trip::{Trip, TripStatus};
