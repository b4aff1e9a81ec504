#![allow(dead_code)]

use andante::{
    fare::{JourneySegment, RouteMatcher},
    network::{Direction, RouteDirection, RouteDirectionId, RouteType, Stop, ZoneGraph},
    source::{self, ZoneGraphSource},
};
use std::sync::Arc;

/// Zones: A-B-C-D-E-F-G in a line, with a branch B-X-Y.
pub fn zone_graph() -> ZoneGraph {
    [
        ("A", "B"),
        ("B", "C"),
        ("C", "D"),
        ("D", "E"),
        ("E", "F"),
        ("F", "G"),
        ("B", "X"),
        ("X", "Y"),
    ]
    .into_iter()
    .collect()
}

pub fn stop(id: &str) -> Stop {
    let (name, zone) = match id {
        "S1" => ("Trindade", Some("A")),
        "S2" => ("Bolhão", Some("A")),
        "S3" => ("Campo 24 de Agosto", Some("B")),
        "S3B" => ("Campo 24 de Agosto", Some("B")),
        "S4" => ("Heroísmo", Some("C")),
        "S4B" => ("Heroísmo", Some("C")),
        "S5" => ("Campanhã", Some("D")),
        "S6" => ("Estádio do Dragão", Some("E")),
        "S7" => ("Fânzeres", Some("F")),
        "S8" => ("Gondomar", Some("G")),
        "X1" => ("Marquês", Some("X")),
        "Y1" => ("Salgueiros", Some("Y")),
        "U1" => ("Unzoned", None),
        _ => panic!("unknown fixture stop {id}"),
    };
    let stop = Stop::new(id, name).with_code(format!("{id}-CODE"));
    match zone {
        Some(zone) => stop.with_zone(zone),
        None => stop,
    }
}

pub fn direction(
    route_id: &str,
    direction: Direction,
    short_name: &str,
    route_type: RouteType,
    stop_ids: &[&str],
) -> RouteDirection {
    let stops: Arc<[Stop]> = stop_ids.iter().map(|id| stop(id)).collect();
    RouteDirection {
        id: RouteDirectionId::new(route_id, direction),
        short_name: short_name.into(),
        start_stop: stops[0].clone(),
        end_stop: stops[stops.len() - 1].clone(),
        stops,
        route_type,
    }
}

/// Route 200 reuses its terminal stop ids in both directions but not the
/// intermediate ones, like real street-side platforms.
pub fn network() -> Vec<RouteDirection> {
    vec![
        direction(
            "200",
            Direction::Zero,
            "200",
            RouteType::Bus,
            &["S1", "S2", "S3", "S4", "S5"],
        ),
        direction(
            "200",
            Direction::One,
            "200",
            RouteType::Bus,
            &["S5", "S4B", "S3B", "S1"],
        ),
        direction(
            "300",
            Direction::Zero,
            "300",
            RouteType::Bus,
            &["S5", "S6", "S7", "S8"],
        ),
        direction(
            "300",
            Direction::One,
            "300",
            RouteType::Bus,
            &["S8", "S7", "S6", "S5"],
        ),
        direction(
            "400",
            Direction::Zero,
            "A",
            RouteType::Metro,
            &["S3", "X1", "Y1"],
        ),
        direction(
            "400",
            Direction::One,
            "A",
            RouteType::Metro,
            &["Y1", "X1", "S3"],
        ),
        direction(
            "500",
            Direction::Zero,
            "500",
            RouteType::Bus,
            &["S1", "U1", "S3"],
        ),
    ]
}

pub fn matcher() -> RouteMatcher {
    RouteMatcher::new(network())
}

pub fn segment(from: &str, to: &str, route_id: &str) -> JourneySegment {
    matcher()
        .resolve_segment(&stop(from), &stop(to), route_id)
        .unwrap()
}

pub struct FailingGraphSource;

impl ZoneGraphSource for FailingGraphSource {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, source::Error> {
        Err(source::Error::Unavailable("network unreachable".into()))
    }
}
