mod common;

use andante::network::{Direction, RouteGroup, RouteType, filter_collections, group_and_sort};

fn summary(groups: &[RouteGroup]) -> Vec<(RouteType, Vec<String>)> {
    groups
        .iter()
        .map(|group| {
            let names = group
                .collections
                .iter()
                .map(|collection| {
                    let directions: Vec<String> = collection
                        .directions
                        .iter()
                        .map(|direction| direction.id.to_string())
                        .collect();
                    format!("{}:{}", collection.short_name, directions.join(","))
                })
                .collect();
            (group.route_type, names)
        })
        .collect()
}

#[test]
fn groups_are_ordered_by_mode() {
    let groups = group_and_sort(&common::network());
    let modes: Vec<RouteType> = groups.iter().map(|group| group.route_type).collect();
    assert_eq!(modes, [RouteType::Metro, RouteType::Bus]);
}

#[test]
fn group_and_sort_orders_collections_and_directions() {
    let mut network = common::network();
    network.reverse();
    let groups = group_and_sort(&network);

    assert_eq!(
        summary(&groups),
        [
            (RouteType::Metro, vec!["A:400_0,400_1".to_string()]),
            (
                RouteType::Bus,
                vec![
                    "200:200_0,200_1".to_string(),
                    "300:300_0,300_1".to_string(),
                    "500:500_0".to_string(),
                ]
            ),
        ]
    );
}

#[test]
fn collections_use_natural_order() {
    let network = vec![
        common::direction("10", Direction::Zero, "10", RouteType::Bus, &["S1", "S2"]),
        common::direction("2", Direction::Zero, "2", RouteType::Bus, &["S1", "S2"]),
        common::direction("ZM", Direction::Zero, "ZM", RouteType::Bus, &["S1", "S2"]),
        common::direction("1M", Direction::Zero, "1M", RouteType::Bus, &["S1", "S2"]),
    ];
    let groups = group_and_sort(&network);
    let names: Vec<&str> = groups[0]
        .collections
        .iter()
        .map(|collection| &*collection.short_name)
        .collect();
    assert_eq!(names, ["1M", "2", "10", "ZM"]);
}

#[test]
fn all_modes_in_display_order() {
    let network = vec![
        common::direction("r", Direction::Zero, "R", RouteType::Rail, &["S1", "S2"]),
        common::direction("b", Direction::Zero, "B", RouteType::Bus, &["S1", "S2"]),
        common::direction("t", Direction::Zero, "T", RouteType::Tram, &["S1", "S2"]),
        common::direction("m", Direction::Zero, "M", RouteType::Metro, &["S1", "S2"]),
    ];
    let modes: Vec<RouteType> = group_and_sort(&network)
        .iter()
        .map(|group| group.route_type)
        .collect();
    assert_eq!(
        modes,
        [RouteType::Metro, RouteType::Tram, RouteType::Bus, RouteType::Rail]
    );
}

#[test]
fn empty_network_has_no_groups() {
    assert!(group_and_sort(&[]).is_empty());
}

#[test]
fn filter_by_stop_name() {
    let groups = group_and_sort(&common::network());
    let filtered = filter_collections(&groups, "dragão");
    assert_eq!(
        summary(&filtered),
        [(RouteType::Bus, vec!["300:300_0,300_1".to_string()])]
    );
}

#[test]
fn filter_ignores_case() {
    let groups = group_and_sort(&common::network());
    let filtered = filter_collections(&groups, "TRINDADE");
    assert_eq!(
        summary(&filtered),
        [(
            RouteType::Bus,
            vec!["200:200_0,200_1".to_string(), "500:500_0".to_string()]
        )]
    );
}

#[test]
fn filter_by_stop_code() {
    let groups = group_and_sort(&common::network());
    let filtered = filter_collections(&groups, "x1-code");
    assert_eq!(
        summary(&filtered),
        [(RouteType::Metro, vec!["A:400_0,400_1".to_string()])]
    );
}

#[test]
fn filter_by_short_name() {
    let groups = group_and_sort(&common::network());
    let filtered = filter_collections(&groups, "500");
    assert_eq!(
        summary(&filtered),
        [(RouteType::Bus, vec!["500:500_0".to_string()])]
    );
}

#[test]
fn filter_keeps_only_matching_directions() {
    // S4 is only served by the outbound 200, the return leg uses S4B
    let groups = group_and_sort(&common::network());
    let filtered = filter_collections(&groups, "S4-CODE");
    assert_eq!(
        summary(&filtered),
        [(RouteType::Bus, vec!["200:200_0".to_string()])]
    );
}

#[test]
fn filter_without_matches_is_empty() {
    let groups = group_and_sort(&common::network());
    assert!(filter_collections(&groups, "zzz").is_empty());
}

#[test]
fn blank_filter_returns_everything() {
    let groups = group_and_sort(&common::network());
    assert_eq!(summary(&filter_collections(&groups, "")), summary(&groups));
    assert_eq!(summary(&filter_collections(&groups, "   ")), summary(&groups));
}

#[test]
fn filter_matches_the_term_as_given() {
    let groups = group_and_sort(&common::network());
    assert!(filter_collections(&groups, " Dragão ").is_empty());
    assert_eq!(
        summary(&filter_collections(&groups, "do Dragão")),
        [(RouteType::Bus, vec!["300:300_0,300_1".to_string()])]
    );
}
