//! Journeys: ordered sequences of segments.

use super::{Segment, StationId};

/// An ordered sequence of segments, built incrementally.
///
/// Insertion order defines traversal order when the journey is
/// summarized. A journey may be empty while it is being assembled.
#[derive(Debug, Clone, Default)]
pub struct Journey {
    segments: Vec<Segment>,
}

impl Journey {
    /// Creates an empty journey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment to the end of the journey.
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns the segments in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if no segments have been added.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the origin of the first segment, if any.
    pub fn origin(&self) -> Option<StationId> {
        self.segments.first().map(Segment::origin)
    }

    /// Returns the destination of the last segment, if any.
    pub fn destination(&self) -> Option<StationId> {
        self.segments.last().map(Segment::destination)
    }
}
