use crate::network::RouteType;

#[derive(Debug, Clone)]
pub struct Config {
    pub stops_file_name: String,
    pub routes_file_name: String,
    pub zone_edges_file_name: String,
    /// Route types dropped while loading. Trams and rail are left out by default.
    pub excluded_route_types: Vec<RouteType>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stops_file_name: "stops_min.txt".into(),
            routes_file_name: "routes_min.txt".into(),
            zone_edges_file_name: "zones_edges.txt".into(),
            excluded_route_types: vec![RouteType::Tram, RouteType::Rail],
        }
    }
}
