use serde::Serialize;
use tracing::debug;

use crate::{
    fare::{self, JourneySegment},
    network::{RouteDirection, Stop},
    shared::ZoneId,
    source::RouteSource,
};

/// Zones crossed between two stops of one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCalculation {
    /// Deduplicated, in the order the route enters them.
    pub zones: Vec<ZoneId>,
    pub zones_count: usize,
}

/// First candidate direction that serves `from` strictly before `to`.
///
/// Candidates are tried in the order given, which is how the travel
/// direction gets picked without the caller naming it.
pub fn find_direction<'a>(
    from: &str,
    to: &str,
    candidates: &'a [RouteDirection],
) -> Result<&'a RouteDirection, fare::Error> {
    candidates
        .iter()
        .find(|direction| direction.forward_span(from, to).is_some())
        .ok_or_else(|| fare::Error::RouteNotFound {
            from: from.into(),
            to: to.into(),
        })
}

/// Zones crossed riding `route_id` from `start` to `finish`.
///
/// Looks at every direction of the route, keeps the first one serving
/// `start` before `finish` and walks its stops between the two (inclusive),
/// collecting each zone the first time it shows up. Unzoned stops along the
/// way are skipped.
pub fn compute_zones(
    start: &Stop,
    finish: &Stop,
    route_id: &str,
    all_directions: &[RouteDirection],
) -> Result<ZoneCalculation, fare::Error> {
    let matched = all_directions
        .iter()
        .filter(|direction| direction.id.route_id == route_id)
        .find_map(|direction| {
            direction
                .forward_span(&start.id, &finish.id)
                .map(|span| (direction, span))
        });

    let Some((direction, (start_idx, finish_idx))) = matched else {
        return Err(fare::Error::NoDirectionCoversStops {
            route_id: route_id.into(),
            from: start.id.clone(),
            to: finish.id.clone(),
        });
    };
    debug!("Matched {} for {} -> {}", direction.id, start.id, finish.id);

    let mut zones: Vec<ZoneId> = Vec::new();
    for stop in &direction.stops[start_idx..=finish_idx] {
        if let Some(zone) = &stop.zone_id
            && !zones.contains(zone)
        {
            zones.push(zone.clone());
        }
    }

    Ok(ZoneCalculation {
        zones_count: zones.len(),
        zones,
    })
}

/// Direction matching over a loaded set of route directions.
#[derive(Debug, Clone, Default)]
pub struct RouteMatcher {
    directions: Vec<RouteDirection>,
}

impl RouteMatcher {
    pub fn new(directions: Vec<RouteDirection>) -> Self {
        Self { directions }
    }

    /// Fetches every direction from `source`. Load failures are passed on.
    pub fn load(source: &impl RouteSource) -> Result<Self, fare::Error> {
        let directions = source.fetch_all_routes().map_err(fare::Error::RouteLoad)?;
        Ok(Self::new(directions))
    }

    pub fn directions(&self) -> &[RouteDirection] {
        &self.directions
    }

    /// Both directions of a route, in load order.
    pub fn directions_of<'a>(
        &'a self,
        route_id: &'a str,
    ) -> impl Iterator<Item = &'a RouteDirection> + 'a {
        self.directions
            .iter()
            .filter(move |direction| direction.id.route_id == route_id)
    }

    /// Looks a stop up by id across every loaded direction.
    pub fn stop_by_id(&self, stop_id: &str) -> Option<&Stop> {
        self.directions
            .iter()
            .flat_map(|direction| direction.stops.iter())
            .find(|stop| stop.id == stop_id)
    }

    pub fn find_direction(&self, from: &str, to: &str) -> Result<&RouteDirection, fare::Error> {
        find_direction(from, to, &self.directions)
    }

    pub fn compute_zones(
        &self,
        start: &Stop,
        finish: &Stop,
        route_id: &str,
    ) -> Result<ZoneCalculation, fare::Error> {
        compute_zones(start, finish, route_id, &self.directions)
    }

    /// Builds a journey segment for riding `route_id` from `start` to `finish`.
    pub fn resolve_segment(
        &self,
        start: &Stop,
        finish: &Stop,
        route_id: &str,
    ) -> Result<JourneySegment, fare::Error> {
        let calculation = self.compute_zones(start, finish, route_id)?;
        Ok(JourneySegment::new(
            start.clone(),
            finish.clone(),
            calculation.zones,
        ))
    }

    /// Like [`RouteMatcher::resolve_segment`] without naming the route.
    /// The first loaded direction serving `start` before `finish` decides it.
    pub fn resolve_segment_between(
        &self,
        start: &Stop,
        finish: &Stop,
    ) -> Result<JourneySegment, fare::Error> {
        let route_id = self.find_direction(&start.id, &finish.id)?.id.route_id.clone();
        self.resolve_segment(start, finish, &route_id)
    }

    /// Directions serving `stop_id`, each cut down to the stops after it.
    ///
    /// These are the places a rider boarding at `stop_id` can still reach.
    /// Directions where it is the last stop are left out.
    pub fn destinations_from(&self, stop_id: &str) -> Vec<RouteDirection> {
        self.directions
            .iter()
            .filter_map(|direction| {
                let from_idx = direction.position_of(stop_id)?;
                let remaining = &direction.stops[from_idx + 1..];
                if remaining.is_empty() {
                    return None;
                }
                Some(RouteDirection {
                    stops: remaining.into(),
                    ..direction.clone()
                })
            })
            .collect()
    }
}
