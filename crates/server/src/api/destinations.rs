use crate::{dto::RouteGroupDto, state::AppState};
use andante::network::group_and_sort;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};

/// Route catalogue of everything reachable after boarding at `from`.
pub async fn destinations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let from = params.get("from").ok_or(StatusCode::BAD_REQUEST)?;
    if state.matcher.stop_by_id(from).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let groups: Vec<RouteGroupDto> = group_and_sort(&state.matcher.destinations_from(from))
        .iter()
        .map(RouteGroupDto::from)
        .collect();
    Ok(Json(groups).into_response())
}
