use chrono::{DateTime, Duration, TimeZone};
use serde::Serialize;
use std::fmt;

use crate::{
    fare::{self, JourneySegment},
    network::{Stop, ZoneGraph, ZoneSet},
    shared::ZoneId,
};

/// The occasional ticket ladder, ordered by reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TicketType {
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
}

impl TicketType {
    pub const ALL: [TicketType; 5] = [Self::Z2, Self::Z3, Self::Z4, Self::Z5, Self::Z6];

    /// Cheapest ticket covering `rings` rings.
    ///
    /// Anything below two rings is a Z2. Anything above six is capped to a Z6,
    /// the largest product sold, even if the journey needs more.
    pub fn for_rings(rings: usize) -> Self {
        match rings {
            0..=2 => Self::Z2,
            3 => Self::Z3,
            4 => Self::Z4,
            5 => Self::Z5,
            _ => Self::Z6,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Z2 => "Z2",
            Self::Z3 => "Z3",
            Self::Z4 => "Z4",
            Self::Z5 => "Z5",
            Self::Z6 => "Z6",
        }
    }

    pub const fn rings(&self) -> usize {
        match self {
            Self::Z2 => 2,
            Self::Z3 => 3,
            Self::Z4 => 4,
            Self::Z5 => 5,
            Self::Z6 => 6,
        }
    }

    /// Minutes the ticket stays valid after its first validation.
    pub const fn validity_minutes(&self) -> u32 {
        match self {
            Self::Z2 | Self::Z3 => 60,
            Self::Z4 => 75,
            Self::Z5 => 90,
            Self::Z6 => 105,
        }
    }

    pub fn validity(&self) -> Duration {
        Duration::minutes(self.validity_minutes().into())
    }

    /// Last instant a ticket first validated at `validated_at` can be used.
    pub fn expires_at<Tz: TimeZone>(&self, validated_at: DateTime<Tz>) -> DateTime<Tz> {
        validated_at + self.validity()
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of pricing one journey.
///
/// `covered_zones` are the zones the rider actually passes through, in route
/// order. `allowed_zones` are every zone the ticket lets the rider enter,
/// found by ring expansion around the start zone; it usually holds zones the
/// route never touches.
///
/// Results compare by identity: a result is only equal to itself, never to
/// another calculation that happens to hold the same zones.
#[derive(Debug, Clone, Serialize)]
pub struct TicketCalculationResult {
    pub covered_zones: ZoneSet,
    pub ticket_type: TicketType,
    pub allowed_zones: ZoneSet,
    pub zone_path: Vec<ZoneId>,
}

impl TicketCalculationResult {
    pub fn covered_zones_count(&self) -> usize {
        self.covered_zones.len()
    }
}

impl PartialEq for TicketCalculationResult {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Prices journeys against a zone graph.
#[derive(Debug, Clone, Copy)]
pub struct TicketCalculator<'a> {
    graph: &'a ZoneGraph,
}

impl<'a> TicketCalculator<'a> {
    pub fn new(graph: &'a ZoneGraph) -> Self {
        Self { graph }
    }

    /// Picks the ticket for a journey crossing `route_zones`.
    ///
    /// The ring count is the number of crossed zones with a floor of two.
    /// Both stops must be zoned.
    pub fn calculate_ticket(
        &self,
        start: &Stop,
        end: &Stop,
        route_zones: &[ZoneId],
    ) -> Result<TicketCalculationResult, fare::Error> {
        let start_zone = require_zone(start)?;
        require_zone(end)?;

        let required_rings = route_zones.len().max(2);
        let ticket_type = TicketType::for_rings(required_rings);
        let allowed_zones = self.graph.zones_within_rings(required_rings, start_zone);

        Ok(TicketCalculationResult {
            covered_zones: route_zones.iter().cloned().collect(),
            ticket_type,
            allowed_zones,
            zone_path: route_zones.to_vec(),
        })
    }

    pub fn calculate_segment(
        &self,
        segment: &JourneySegment,
    ) -> Result<TicketCalculationResult, fare::Error> {
        self.calculate_ticket(&segment.start_stop, &segment.end_stop, &segment.route_zones)
    }

    /// Zones reachable with a `rings` ring ticket validated in `start_zone`.
    pub fn allowed_zones(&self, start_zone: &ZoneId, rings: usize) -> ZoneSet {
        self.graph.zones_within_rings(rings, start_zone)
    }
}

pub(crate) fn require_zone(stop: &Stop) -> Result<&ZoneId, fare::Error> {
    stop.zone_id.as_ref().ok_or_else(|| fare::Error::MissingZone {
        stop_id: stop.id.clone(),
    })
}
