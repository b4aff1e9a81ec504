use andante::network::Stop;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub zone_id: Option<String>,
}

impl StopDto {
    pub fn from(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.to_string(),
            code: stop.code.as_ref().map(|code| code.to_string()),
            zone_id: stop.zone_id.as_ref().map(|zone| zone.to_string()),
        }
    }
}
