use indexmap::IndexSet;
use serde::Serialize;

use crate::{network::Stop, shared::ZoneId};

/// One leg of a journey, already resolved to the zones it crosses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneySegment {
    pub start_stop: Stop,
    pub end_stop: Stop,
    /// Zones crossed along the route, deduplicated, in travel order.
    pub route_zones: Vec<ZoneId>,
}

impl JourneySegment {
    pub fn new(start_stop: Stop, end_stop: Stop, route_zones: Vec<ZoneId>) -> Self {
        Self {
            start_stop,
            end_stop,
            route_zones,
        }
    }

    pub fn start_zone(&self) -> Option<&ZoneId> {
        self.start_stop.zone_id.as_ref()
    }

    pub fn end_zone(&self) -> Option<&ZoneId> {
        self.end_stop.zone_id.as_ref()
    }
}

/// Ordered legs of a journey with transfers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiSegmentJourney {
    pub segments: Vec<JourneySegment>,
}

impl MultiSegmentJourney {
    pub fn new(segments: Vec<JourneySegment>) -> Self {
        Self { segments }
    }

    pub fn first_segment(&self) -> Option<&JourneySegment> {
        self.segments.first()
    }

    pub fn last_segment(&self) -> Option<&JourneySegment> {
        self.segments.last()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every zone crossed by any segment, in order of first appearance.
    pub fn unique_covered_zones(&self) -> Vec<ZoneId> {
        self.segments
            .iter()
            .flat_map(|segment| segment.route_zones.iter().cloned())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<JourneySegment>> for MultiSegmentJourney {
    fn from(segments: Vec<JourneySegment>) -> Self {
        Self::new(segments)
    }
}
