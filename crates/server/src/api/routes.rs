use crate::{dto::RouteGroupDto, state::AppState};
use andante::network::filter_collections;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};

pub async fn routes(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let result: Vec<_> = match params.get("q") {
        Some(term) => filter_collections(&state.catalog, term)
            .iter()
            .map(RouteGroupDto::from)
            .collect(),
        None => state.catalog.iter().map(RouteGroupDto::from).collect(),
    };
    Ok(Json(result).into_response())
}
