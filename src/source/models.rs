use serde::{Deserialize, Serialize};

use crate::network::Stop;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopRow {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
    pub stop_code: Option<String>,
    pub zone_id: Option<String>,
}

impl From<StopRow> for Stop {
    fn from(value: StopRow) -> Self {
        Self {
            id: value.stop_id.unwrap_or_default().into(),
            name: value.stop_name.unwrap_or_default().into(),
            code: non_empty(value.stop_code).map(Into::into),
            zone_id: non_empty(value.zone_id).map(Into::into),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RouteRow {
    pub route_id: Option<String>,
    pub route_short_name: Option<String>,
    pub direction_id: Option<String>,
    pub start_stop_id: Option<String>,
    pub end_stop_id: Option<String>,
    /// Stop ids separated by `|`.
    pub stop_sequence: Option<String>,
    pub route_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ZoneEdgeRow {
    pub zone: Option<String>,
    pub neighbor: Option<String>,
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
