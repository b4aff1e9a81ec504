use andante::{
    fare::RouteMatcher,
    network::{RouteGroup, group_and_sort},
    source::{CachedZoneGraph, CsvSource},
};

pub struct AppState {
    pub matcher: RouteMatcher,
    pub catalog: Vec<RouteGroup>,
    pub graphs: CachedZoneGraph<CsvSource>,
}

impl AppState {
    pub fn new(matcher: RouteMatcher, graphs: CachedZoneGraph<CsvSource>) -> Self {
        let catalog = group_and_sort(matcher.directions());
        Self {
            matcher,
            catalog,
            graphs,
        }
    }
}
