use andante::fare::{TicketCalculationResult, TicketType, ZoneCalculation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketTypeDto {
    pub name: String,
    pub rings: usize,
    pub validity_minutes: u32,
}

impl TicketTypeDto {
    pub fn from(ticket_type: TicketType) -> Self {
        Self {
            name: ticket_type.name().to_string(),
            rings: ticket_type.rings(),
            validity_minutes: ticket_type.validity_minutes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDto {
    pub ticket_type: TicketTypeDto,
    /// Zones the ride passes through, in travel order.
    pub covered_zones: Vec<String>,
    /// Zones the ticket lets the rider enter.
    pub allowed_zones: Vec<String>,
}

impl TicketDto {
    pub fn from(result: &TicketCalculationResult) -> Self {
        Self {
            ticket_type: TicketTypeDto::from(result.ticket_type),
            covered_zones: result.covered_zones.iter().map(|z| z.to_string()).collect(),
            allowed_zones: result.allowed_zones.iter().map(|z| z.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonesDto {
    pub zones: Vec<String>,
    pub zones_count: usize,
    pub ticket: TicketDto,
}

impl ZonesDto {
    pub fn from(calculation: &ZoneCalculation, ticket: &TicketCalculationResult) -> Self {
        Self {
            zones: calculation.zones.iter().map(|z| z.to_string()).collect(),
            zones_count: calculation.zones_count,
            ticket: TicketDto::from(ticket),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRequest {
    /// Picked from the stops when absent.
    #[serde(default)]
    pub route: Option<String>,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub segments: Vec<SegmentRequest>,
}
