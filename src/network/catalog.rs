use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    network::{RouteDirection, RouteType},
    shared::natural_cmp,
};

/// Every direction published under one route short name (e.g. "200").
#[derive(Debug, Clone, Serialize)]
pub struct RouteCollection {
    pub short_name: Arc<str>,
    pub route_type: RouteType,
    pub directions: Vec<RouteDirection>,
}

/// All route collections of one transport mode.
#[derive(Debug, Clone, Serialize)]
pub struct RouteGroup {
    pub route_type: RouteType,
    pub collections: Vec<RouteCollection>,
}

/// Groups directions by mode and then by short name.
///
/// Groups come out as metro, tram, bus, rail. Collections inside a group are
/// in natural short name order and their directions are sorted by direction.
pub fn group_and_sort(routes: &[RouteDirection]) -> Vec<RouteGroup> {
    let mut by_type: IndexMap<RouteType, Vec<&RouteDirection>> = IndexMap::new();
    for route in routes {
        by_type.entry(route.route_type).or_default().push(route);
    }

    let mut groups: Vec<RouteGroup> = by_type
        .into_iter()
        .map(|(route_type, routes)| RouteGroup {
            route_type,
            collections: group_by_short_name(routes),
        })
        .collect();
    groups.sort_by_key(|group| group.route_type.priority());
    groups
}

fn group_by_short_name(routes: Vec<&RouteDirection>) -> Vec<RouteCollection> {
    let mut by_name: IndexMap<Arc<str>, Vec<RouteDirection>> = IndexMap::new();
    for route in routes {
        by_name
            .entry(route.short_name.clone())
            .or_default()
            .push(route.clone());
    }

    let mut collections: Vec<RouteCollection> = by_name
        .into_iter()
        .filter_map(|(short_name, mut directions)| {
            let route_type = directions.first()?.route_type;
            directions.sort_by_key(|direction| direction.id.direction);
            Some(RouteCollection {
                short_name,
                route_type,
                directions,
            })
        })
        .collect();
    collections.sort_by(|a, b| natural_cmp(&a.short_name, &b.short_name));
    collections
}

/// Keeps the directions whose short name, or any stop name or code,
/// contains `term` (case insensitive). Collections and groups left without
/// directions are dropped. A blank term returns the groups untouched, any
/// other term is matched as given, surrounding whitespace included.
pub fn filter_collections(groups: &[RouteGroup], term: &str) -> Vec<RouteGroup> {
    if term.trim().is_empty() {
        return groups.to_vec();
    }
    let needle = term.to_lowercase();

    groups
        .par_iter()
        .filter_map(|group| {
            let collections: Vec<RouteCollection> = group
                .collections
                .iter()
                .filter_map(|collection| filter_collection(collection, &needle))
                .collect();
            (!collections.is_empty()).then(|| RouteGroup {
                route_type: group.route_type,
                collections,
            })
        })
        .collect()
}

fn filter_collection(collection: &RouteCollection, needle: &str) -> Option<RouteCollection> {
    let name_matches = collection.short_name.to_lowercase().contains(needle);
    let directions: Vec<RouteDirection> = collection
        .directions
        .iter()
        .filter(|direction| name_matches || serves_matching_stop(direction, needle))
        .cloned()
        .collect();
    if directions.is_empty() {
        return None;
    }
    Some(RouteCollection {
        short_name: collection.short_name.clone(),
        route_type: collection.route_type,
        directions,
    })
}

fn serves_matching_stop(direction: &RouteDirection, needle: &str) -> bool {
    direction.stops.iter().any(|stop| {
        stop.name.to_lowercase().contains(needle)
            || stop
                .code
                .as_ref()
                .is_some_and(|code| code.to_lowercase().contains(needle))
    })
}
