//! Journey segments.

use super::{StationId, TransportOption};

/// One directed leg of a journey between two stations.
///
/// The options list is a snapshot copied at construction; later changes
/// to the origin station's own list are not reflected here.
#[derive(Debug, Clone)]
pub struct Segment {
    origin: StationId,
    destination: StationId,
    options: Vec<TransportOption>,
}

impl Segment {
    /// Creates a segment, snapshotting the given options.
    pub fn new(origin: StationId, destination: StationId, options: &[TransportOption]) -> Self {
        Self {
            origin,
            destination,
            options: options.to_vec(),
        }
    }

    /// Returns the origin station handle.
    pub fn origin(&self) -> StationId {
        self.origin
    }

    /// Returns the destination station handle.
    pub fn destination(&self) -> StationId {
        self.destination
    }

    /// Returns the snapshotted transport options, in original order.
    pub fn options(&self) -> &[TransportOption] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comfort, Money};
    use chrono::Duration;

    fn opt(name: &str) -> TransportOption {
        TransportOption::new(
            name,
            Money::from_dollars(50.0),
            Duration::hours(5),
            Comfort::new(3),
        )
    }

    #[test]
    fn snapshot_is_independent_of_source() {
        let mut source = vec![opt("Bus")];
        let segment = Segment::new(StationId(0), StationId(1), &source);

        source.push(opt("Train"));
        source[0] = opt("Ferry");

        assert_eq!(segment.options().len(), 1);
        assert_eq!(segment.options()[0].name(), "Bus");
    }

    #[test]
    fn accessors() {
        let segment = Segment::new(StationId(2), StationId(5), &[]);

        assert_eq!(segment.origin(), StationId(2));
        assert_eq!(segment.destination(), StationId(5));
        assert!(segment.options().is_empty());
    }
}
