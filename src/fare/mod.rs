use thiserror::Error;

use crate::{
    shared::{RouteId, StopId},
    source,
};

mod journey;
mod matcher;
mod recommend;
mod ticket;

pub use journey::*;
pub use matcher::*;
pub use recommend::*;
pub use ticket::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Stop {stop_id} has no zone assigned")]
    MissingZone { stop_id: StopId },
    #[error("No route found from {from} to {to}")]
    RouteNotFound { from: StopId, to: StopId },
    #[error("No direction of route {route_id} covers {from} before {to}")]
    NoDirectionCoversStops {
        route_id: RouteId,
        from: StopId,
        to: StopId,
    },
    #[error("Failed to load routes: {0}")]
    RouteLoad(#[source] source::Error),
    #[error("Failed to load zone graph: {0}")]
    GraphLoad(#[source] source::Error),
}
