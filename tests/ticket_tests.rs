mod common;

use andante::{
    fare::{self, TicketCalculator, TicketType},
    shared::ZoneId,
};
use chrono::{TimeZone, Utc};

fn zones(ids: &[&str]) -> Vec<ZoneId> {
    ids.iter().map(|id| ZoneId::from(*id)).collect()
}

#[test]
fn ticket_for_rings_has_a_floor_of_two() {
    assert_eq!(TicketType::for_rings(0), TicketType::Z2);
    assert_eq!(TicketType::for_rings(1), TicketType::Z2);
    assert_eq!(TicketType::for_rings(2), TicketType::Z2);
}

#[test]
fn ticket_for_rings_ladder() {
    assert_eq!(TicketType::for_rings(3), TicketType::Z3);
    assert_eq!(TicketType::for_rings(4), TicketType::Z4);
    assert_eq!(TicketType::for_rings(5), TicketType::Z5);
    assert_eq!(TicketType::for_rings(6), TicketType::Z6);
}

#[test]
fn ticket_for_rings_is_capped_at_z6() {
    assert_eq!(TicketType::for_rings(7), TicketType::Z6);
    assert_eq!(TicketType::for_rings(100), TicketType::Z6);
}

#[test]
fn ticket_names_and_rings() {
    let names: Vec<&str> = TicketType::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["Z2", "Z3", "Z4", "Z5", "Z6"]);
    for ticket in TicketType::ALL {
        assert_eq!(TicketType::for_rings(ticket.rings()), ticket);
    }
    assert_eq!(TicketType::Z4.to_string(), "Z4");
}

#[test]
fn ticket_validity() {
    let minutes: Vec<u32> = TicketType::ALL.iter().map(|t| t.validity_minutes()).collect();
    assert_eq!(minutes, [60, 60, 75, 90, 105]);

    let validated = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
    let expires = TicketType::Z4.expires_at(validated);
    assert_eq!(expires, Utc.with_ymd_and_hms(2024, 3, 1, 9, 45, 0).unwrap());
}

#[test]
fn calculate_single_zone_journey() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let result = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S2"), &zones(&["A"]))
        .unwrap();

    assert_eq!(result.ticket_type, TicketType::Z2);
    assert_eq!(result.covered_zones_count(), 1);
    let allowed: Vec<&str> = result.allowed_zones.iter().map(|z| z.as_str()).collect();
    assert_eq!(allowed, ["A", "B"]);
}

#[test]
fn calculate_three_zone_journey() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let route_zones = zones(&["A", "B", "C"]);
    let result = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S4"), &route_zones)
        .unwrap();

    assert_eq!(result.ticket_type, TicketType::Z3);
    assert_eq!(result.zone_path, route_zones);
    let covered: Vec<&str> = result.covered_zones.iter().map(|z| z.as_str()).collect();
    assert_eq!(covered, ["A", "B", "C"]);
    let allowed: Vec<&str> = result.allowed_zones.iter().map(|z| z.as_str()).collect();
    assert_eq!(allowed, ["A", "B", "C", "X"]);
}

#[test]
fn allowed_zones_reach_beyond_covered_zones() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let result = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S4"), &zones(&["A", "B", "C"]))
        .unwrap();

    assert!(result.allowed_zones.contains("X"));
    assert!(!result.covered_zones.contains("X"));
}

#[test]
fn empty_route_zones_still_buy_a_z2() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let result = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S2"), &[])
        .unwrap();
    assert_eq!(result.ticket_type, TicketType::Z2);
    assert_eq!(result.covered_zones_count(), 0);
}

#[test]
fn long_journeys_are_capped() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let route_zones = zones(&["A", "B", "C", "D", "E", "F", "G"]);
    let result = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S8"), &route_zones)
        .unwrap();
    assert_eq!(result.ticket_type, TicketType::Z6);
    assert_eq!(result.covered_zones_count(), 7);
}

#[test]
fn unzoned_start_is_rejected() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let result =
        calculator.calculate_ticket(&common::stop("U1"), &common::stop("S3"), &zones(&["B"]));
    assert!(matches!(result, Err(fare::Error::MissingZone { stop_id }) if stop_id == "U1"));
}

#[test]
fn unzoned_end_is_rejected() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let result =
        calculator.calculate_ticket(&common::stop("S1"), &common::stop("U1"), &zones(&["A"]));
    assert!(matches!(result, Err(fare::Error::MissingZone { stop_id }) if stop_id == "U1"));
}

#[test]
fn calculate_segment_uses_route_zones() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let segment = common::segment("S5", "S8", "300");
    let result = calculator.calculate_segment(&segment).unwrap();
    assert_eq!(result.ticket_type, TicketType::Z4);
    assert_eq!(result.zone_path, zones(&["D", "E", "F", "G"]));
}

#[test]
fn allowed_zones_by_rings() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let allowed = calculator.allowed_zones(&ZoneId::from("D"), 2);
    let allowed: Vec<&str> = allowed.iter().map(|z| z.as_str()).collect();
    assert_eq!(allowed, ["D", "C", "E"]);
}

#[test]
fn results_compare_by_identity() {
    let graph = common::zone_graph();
    let calculator = TicketCalculator::new(&graph);
    let result = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S2"), &zones(&["A"]))
        .unwrap();
    let again = calculator
        .calculate_ticket(&common::stop("S1"), &common::stop("S2"), &zones(&["A"]))
        .unwrap();

    let same = &result;
    assert_eq!(&result, same);
    assert_ne!(result, result.clone());
    assert_ne!(result, again);
}
