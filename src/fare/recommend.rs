use serde::Serialize;
use tracing::{debug, error, warn};

use crate::{
    fare::{MultiSegmentJourney, TicketCalculationResult, TicketCalculator},
    network::ZoneGraph,
    source::ZoneGraphSource,
};

pub const GRAPH_UNAVAILABLE: &str = "Unable to load zone graph";
pub const RECOMMENDATION_UNAVAILABLE: &str = "Unable to calculate ticket recommendation";
pub const LONG_BREAK_ALTERNATIVE: &str =
    "For long breaks between journeys, separate tickets may be more convenient.";
pub const ZONES_NOT_ACCESSIBLE: &str =
    "Separate tickets are required because some destinations are not accessible from your starting zone with a single ticket.";
pub const VALIDATE_EACH_SEGMENT: &str = "Each journey segment requires its own ticket validation.";

/// What the rider should buy.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recommendation {
    /// Single leg journeys: one ticket, nothing to compare against.
    SingleTicketRecommended { ticket: TicketCalculationResult },
    /// One ticket covers every leg, separate tickets remain an option.
    SingleTicketWithOptions {
        single_ticket: TicketCalculationResult,
        separate_tickets: Vec<TicketCalculationResult>,
    },
    /// At least one leg starts outside the reach of a combined ticket.
    SeparateTicketsRequired { tickets: Vec<TicketCalculationResult> },
}

impl Recommendation {
    pub fn can_use_single_ticket(&self) -> bool {
        matches!(
            self,
            Self::SingleTicketRecommended { .. } | Self::SingleTicketWithOptions { .. }
        )
    }

    pub fn has_multiple_options(&self) -> bool {
        matches!(self, Self::SingleTicketWithOptions { .. })
    }
}

/// Disclaimer texts attached to a recommendation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Disclaimers {
    /// Shown next to the recommended option.
    pub recommended: Vec<String>,
    /// Shown next to the alternative option.
    pub alternative: Vec<String>,
}

impl Disclaimers {
    /// Texts for `recommendation` on a journey of `segment_count` legs.
    pub fn for_recommendation(recommendation: &Recommendation, segment_count: usize) -> Self {
        let mut disclaimers = Self::default();
        match recommendation {
            Recommendation::SingleTicketRecommended { ticket } => {
                if segment_count > 1 {
                    disclaimers.recommended.push(validity_window(ticket));
                }
            }
            Recommendation::SingleTicketWithOptions { single_ticket, .. } => {
                disclaimers.recommended.push(validity_window(single_ticket));
                disclaimers.alternative.push(LONG_BREAK_ALTERNATIVE.into());
            }
            Recommendation::SeparateTicketsRequired { .. } => {
                disclaimers.alternative.push(ZONES_NOT_ACCESSIBLE.into());
                disclaimers.alternative.push(VALIDATE_EACH_SEGMENT.into());
            }
        }
        disclaimers
    }
}

fn validity_window(ticket: &TicketCalculationResult) -> String {
    format!(
        "Complete all journeys within {} minutes from first validation.",
        ticket.ticket_type.validity_minutes()
    )
}

/// A journey together with its recommendation and disclaimers.
#[derive(Debug, Clone, Serialize)]
pub struct TicketRecommendation {
    pub journey: MultiSegmentJourney,
    pub recommendation: Recommendation,
    pub recommended_disclaimers: Vec<String>,
    pub alternative_disclaimers: Vec<String>,
}

impl TicketRecommendation {
    fn new(journey: MultiSegmentJourney, recommendation: Recommendation) -> Self {
        let disclaimers = Disclaimers::for_recommendation(&recommendation, journey.len());
        Self {
            journey,
            recommendation,
            recommended_disclaimers: disclaimers.recommended,
            alternative_disclaimers: disclaimers.alternative,
        }
    }

    /// Separate tickets with nothing to show and a single explanation.
    fn degraded(journey: MultiSegmentJourney, reason: &str) -> Self {
        Self {
            journey,
            recommendation: Recommendation::SeparateTicketsRequired {
                tickets: Vec::new(),
            },
            recommended_disclaimers: Vec::new(),
            alternative_disclaimers: vec![reason.to_string()],
        }
    }

    pub fn can_use_single_ticket(&self) -> bool {
        self.recommendation.can_use_single_ticket()
    }

    pub fn has_multiple_options(&self) -> bool {
        self.recommendation.has_multiple_options()
    }
}

/// Decides between one combined ticket and one ticket per leg.
///
/// Never fails: when the graph cannot be loaded or nothing can be priced the
/// answer falls back to separate tickets with an explanation.
pub struct MultiSegmentRecommender<G> {
    graphs: G,
}

impl<G: ZoneGraphSource> MultiSegmentRecommender<G> {
    pub fn new(graphs: G) -> Self {
        Self { graphs }
    }

    pub fn recommend(&self, journey: MultiSegmentJourney) -> TicketRecommendation {
        let graph = match self.graphs.load_graph() {
            Ok(graph) => graph,
            Err(err) => {
                error!("Falling back to separate tickets, zone graph failed to load: {err}");
                return TicketRecommendation::degraded(journey, GRAPH_UNAVAILABLE);
            }
        };
        let calculator = TicketCalculator::new(&graph);

        let separate_tickets: Vec<TicketCalculationResult> = journey
            .segments
            .iter()
            .enumerate()
            .filter_map(|(i, segment)| match calculator.calculate_segment(segment) {
                Ok(result) => Some(result),
                Err(err) => {
                    warn!("Dropping segment {i} from the recommendation: {err}");
                    None
                }
            })
            .collect();

        if journey.is_empty() || separate_tickets.is_empty() {
            warn!("No segment could be priced, falling back to separate tickets");
            return TicketRecommendation::degraded(journey, RECOMMENDATION_UNAVAILABLE);
        }

        let recommendation = choose(&journey, &graph, &calculator, separate_tickets);
        debug!(
            "Recommending {} for {} segment(s)",
            variant_name(&recommendation),
            journey.len()
        );
        TicketRecommendation::new(journey, recommendation)
    }
}

fn choose(
    journey: &MultiSegmentJourney,
    graph: &ZoneGraph,
    calculator: &TicketCalculator<'_>,
    separate_tickets: Vec<TicketCalculationResult>,
) -> Recommendation {
    let (Some(first), Some(last)) = (journey.first_segment(), journey.last_segment()) else {
        return Recommendation::SeparateTicketsRequired {
            tickets: separate_tickets,
        };
    };
    let Some(start_zone) = first.start_zone() else {
        return Recommendation::SeparateTicketsRequired {
            tickets: separate_tickets,
        };
    };

    let all_zones = journey.unique_covered_zones();
    let single_ticket =
        match calculator.calculate_ticket(&first.start_stop, &last.end_stop, &all_zones) {
            Ok(result) => result,
            Err(err) => {
                warn!("Combined ticket could not be priced: {err}");
                return Recommendation::SeparateTicketsRequired {
                    tickets: separate_tickets,
                };
            }
        };

    let accessible_zones = graph.zones_within_rings(single_ticket.ticket_type.rings(), start_zone);
    let all_segments_accessible = journey.segments.iter().all(|segment| {
        segment
            .start_zone()
            .is_some_and(|zone| accessible_zones.contains(zone))
    });

    if journey.len() == 1 {
        Recommendation::SingleTicketRecommended {
            ticket: single_ticket,
        }
    } else if all_segments_accessible {
        Recommendation::SingleTicketWithOptions {
            single_ticket,
            separate_tickets,
        }
    } else {
        Recommendation::SeparateTicketsRequired {
            tickets: separate_tickets,
        }
    }
}

fn variant_name(recommendation: &Recommendation) -> &'static str {
    match recommendation {
        Recommendation::SingleTicketRecommended { .. } => "a single ticket",
        Recommendation::SingleTicketWithOptions { .. } => "a single ticket with options",
        Recommendation::SeparateTicketsRequired { .. } => "separate tickets",
    }
}
