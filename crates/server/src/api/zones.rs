use crate::{dto::ZonesDto, state::AppState};
use andante::{
    fare::{self, TicketCalculator},
    network::ZoneGraph,
    shared::{RouteId, ZoneId},
    source::ZoneGraphSource,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{error, warn};

pub async fn allowed_zones(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let zone: ZoneId = params
        .get("zone")
        .ok_or(StatusCode::BAD_REQUEST)?
        .as_str()
        .into();
    let rings: usize = match params.get("rings") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => return Err(StatusCode::BAD_REQUEST),
    };

    let graph = load_graph(&state).map_err(status_for)?;
    let zones: Vec<String> = TicketCalculator::new(&graph)
        .allowed_zones(&zone, rings)
        .iter()
        .map(|zone| zone.to_string())
        .collect();
    Ok(Json(zones).into_response())
}

pub async fn zones(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let (Some(from), Some(to)) = (params.get("from"), params.get("to")) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let start = state.matcher.stop_by_id(from).ok_or(StatusCode::NOT_FOUND)?;
    let finish = state.matcher.stop_by_id(to).ok_or(StatusCode::NOT_FOUND)?;

    let route_id: RouteId = match params.get("route") {
        Some(route) => route.as_str().into(),
        None => {
            let direction = state.matcher.find_direction(from, to).map_err(status_for)?;
            direction.id.route_id.clone()
        }
    };
    let calculation = state
        .matcher
        .compute_zones(start, finish, &route_id)
        .map_err(status_for)?;
    let graph = load_graph(&state).map_err(status_for)?;
    let ticket = TicketCalculator::new(&graph)
        .calculate_ticket(start, finish, &calculation.zones)
        .map_err(status_for)?;

    Ok(Json(ZonesDto::from(&calculation, &ticket)).into_response())
}

fn load_graph(state: &AppState) -> Result<Arc<ZoneGraph>, fare::Error> {
    state.graphs.load_graph().map_err(fare::Error::GraphLoad)
}

fn status_for(err: fare::Error) -> StatusCode {
    match err {
        fare::Error::RouteLoad(_) | fare::Error::GraphLoad(_) => {
            error!("{err}");
            StatusCode::SERVICE_UNAVAILABLE
        }
        fare::Error::MissingZone { .. }
        | fare::Error::RouteNotFound { .. }
        | fare::Error::NoDirectionCoversStops { .. } => {
            warn!("{err}");
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}
