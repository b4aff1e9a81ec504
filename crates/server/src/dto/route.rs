use andante::network::{RouteCollection, RouteDirection, RouteGroup};
use serde::{Deserialize, Serialize};

use crate::dto::StopDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDirectionDto {
    /// `"{route_id}_{direction}"`
    pub id: String,
    pub route_id: String,
    pub direction: u8,
    pub short_name: String,
    pub start_stop: StopDto,
    pub end_stop: StopDto,
    pub stops: Vec<StopDto>,
}

impl RouteDirectionDto {
    pub fn from(direction: &RouteDirection) -> Self {
        Self {
            id: direction.id.to_string(),
            route_id: direction.id.route_id.to_string(),
            direction: direction.id.direction.as_raw(),
            short_name: direction.short_name.to_string(),
            start_stop: StopDto::from(&direction.start_stop),
            end_stop: StopDto::from(&direction.end_stop),
            stops: direction.stops.iter().map(StopDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCollectionDto {
    pub short_name: String,
    pub directions: Vec<RouteDirectionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGroupDto {
    pub route_type: String,
    pub collections: Vec<RouteCollectionDto>,
}

impl RouteGroupDto {
    pub fn from(group: &RouteGroup) -> Self {
        Self {
            route_type: group.route_type.name().to_string(),
            collections: group
                .collections
                .iter()
                .map(|collection: &RouteCollection| RouteCollectionDto {
                    short_name: collection.short_name.to_string(),
                    directions: collection
                        .directions
                        .iter()
                        .map(RouteDirectionDto::from)
                        .collect(),
                })
                .collect(),
        }
    }
}
