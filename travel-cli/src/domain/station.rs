//! Stations and the network that owns them.
//!
//! Stations live in a single arena (`Network`) and are referenced by
//! stable `StationId` handles, so nothing holds a dangling pointer when
//! the backing storage grows.

use std::fmt;

use super::{Journey, Segment, TransportOption};

/// A stable handle into a `Network`'s station arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub usize);

/// A named node offering outgoing transport options.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    options: Vec<TransportOption>,
}

impl Station {
    fn new(name: String) -> Self {
        Self {
            name,
            options: Vec::new(),
        }
    }

    /// Returns the station's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the outgoing transport options in insertion order.
    pub fn options(&self) -> &[TransportOption] {
        &self.options
    }

    /// Formats the station's options for display, one per line.
    pub fn describe_options(&self) -> String {
        let mut out = format!("Transport options from {}:\n", self.name);
        for option in &self.options {
            out.push_str(&format!("- {option}\n"));
        }
        out
    }
}

/// Arena of stations, traversed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station and returns its handle.
    pub fn add_station(&mut self, name: impl Into<String>) -> StationId {
        let id = StationId(self.stations.len());
        self.stations.push(Station::new(name.into()));
        id
    }

    /// Appends a transport option to a station's list.
    ///
    /// Returns `false` if the id does not belong to this network.
    pub fn add_option(&mut self, id: StationId, option: TransportOption) -> bool {
        match self.stations.get_mut(id.0) {
            Some(station) => {
                station.options.push(option);
                true
            }
            None => false,
        }
    }

    /// Looks up a station by handle.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    /// Returns a station's name, or a placeholder for a foreign id.
    pub fn station_name(&self, id: StationId) -> &str {
        self.station(id).map_or("(unknown)", |s| s.name())
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Builds the journey that visits every station in insertion order.
    ///
    /// Each hop becomes one segment carrying a snapshot of the origin
    /// station's options. A network with fewer than two stations yields
    /// an empty journey.
    pub fn itinerary(&self) -> Journey {
        let mut journey = Journey::new();
        for i in 1..self.stations.len() {
            journey.push_segment(Segment::new(
                StationId(i - 1),
                StationId(i),
                self.stations[i - 1].options(),
            ));
        }
        journey
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comfort, Money};
    use chrono::Duration;

    fn opt(name: &str, dollars: f64, hours: i64, stars: u8) -> TransportOption {
        TransportOption::new(
            name,
            Money::from_dollars(dollars),
            Duration::hours(hours),
            Comfort::new(stars),
        )
    }

    #[test]
    fn add_and_look_up_stations() {
        let mut network = Network::new();
        let a = network.add_station("Station A");
        let b = network.add_station("Station B");

        assert_eq!(network.len(), 2);
        assert_eq!(network.station(a).unwrap().name(), "Station A");
        assert_eq!(network.station_name(b), "Station B");
        assert!(network.station(StationId(9)).is_none());
        assert_eq!(network.station_name(StationId(9)), "(unknown)");
    }

    #[test]
    fn options_append_in_order() {
        let mut network = Network::new();
        let a = network.add_station("Station A");

        assert!(network.add_option(a, opt("Bus", 50.0, 5, 3)));
        assert!(network.add_option(a, opt("Train", 80.0, 3, 4)));

        let names: Vec<_> = network
            .station(a)
            .unwrap()
            .options()
            .iter()
            .map(|o| o.name())
            .collect();
        assert_eq!(names, ["Bus", "Train"]);
    }

    #[test]
    fn add_option_rejects_foreign_id() {
        let mut network = Network::new();
        assert!(!network.add_option(StationId(0), opt("Bus", 50.0, 5, 3)));
    }

    #[test]
    fn describe_options_lists_each() {
        let mut network = Network::new();
        let a = network.add_station("Station A");
        network.add_option(a, opt("Bus", 50.0, 5, 3));

        let text = network.station(a).unwrap().describe_options();
        assert_eq!(
            text,
            "Transport options from Station A:\n\
             - Bus | Cost: $50.00, Time: 5 hrs, Comfort: 3 stars\n"
        );
    }

    #[test]
    fn itinerary_chains_stations() {
        let mut network = Network::new();
        let a = network.add_station("A");
        let _b = network.add_station("B");
        let _c = network.add_station("C");
        network.add_option(a, opt("Bus", 50.0, 5, 3));

        let journey = network.itinerary();
        assert_eq!(journey.segments().len(), 2);
        assert_eq!(journey.segments()[0].origin(), StationId(0));
        assert_eq!(journey.segments()[0].destination(), StationId(1));
        assert_eq!(journey.segments()[0].options().len(), 1);
        assert_eq!(journey.segments()[1].origin(), StationId(1));
        assert_eq!(journey.segments()[1].destination(), StationId(2));
        assert!(journey.segments()[1].options().is_empty());
    }

    #[test]
    fn itinerary_needs_two_stations() {
        let mut network = Network::new();
        assert!(network.itinerary().is_empty());
        network.add_station("Lonely");
        assert!(network.itinerary().is_empty());
    }

    #[test]
    fn itinerary_snapshots_options() {
        let mut network = Network::new();
        let a = network.add_station("A");
        network.add_station("B");
        network.add_option(a, opt("Bus", 50.0, 5, 3));

        let journey = network.itinerary();
        // Mutating the station afterwards must not affect the snapshot.
        network.add_option(a, opt("Train", 80.0, 3, 4));

        assert_eq!(journey.segments()[0].options().len(), 1);
        assert_eq!(network.station(a).unwrap().options().len(), 2);
    }
}
