pub use crate::{
    fare::{
        Disclaimers, JourneySegment, MultiSegmentJourney, MultiSegmentRecommender,
        Recommendation, RouteMatcher, TicketCalculationResult, TicketCalculator,
        TicketRecommendation, TicketType, ZoneCalculation,
    },
    network::{
        Direction, RouteCollection, RouteDirection, RouteDirectionId, RouteGroup, RouteType,
        Stop, ZoneGraph, ZoneSet,
    },
    shared::{RouteId, StopId, ZoneId},
    source::{CachedZoneGraph, Config, CsvSource, RouteSource, ZoneGraphSource},
};
