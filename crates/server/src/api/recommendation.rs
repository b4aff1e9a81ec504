use crate::{
    dto::{RecommendationRequest, SegmentRequest},
    state::AppState,
};
use andante::fare::{JourneySegment, MultiSegmentJourney, MultiSegmentRecommender, RouteMatcher};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

const MAX_SEGMENTS: usize = 10;

pub async fn recommendation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Response, Response> {
    let journey = resolve_journey(&state.matcher, &request)?;
    let recommender = MultiSegmentRecommender::new(&state.graphs);
    let result = recommender.recommend(journey);
    Ok(Json(result).into_response())
}

fn resolve_journey(
    matcher: &RouteMatcher,
    request: &RecommendationRequest,
) -> Result<MultiSegmentJourney, Response> {
    if request.segments.is_empty() || request.segments.len() > MAX_SEGMENTS {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("A journey needs between 1 and {MAX_SEGMENTS} segments"),
        )
            .into_response());
    }
    let segments = request
        .segments
        .iter()
        .map(|segment| resolve_segment(matcher, segment))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiSegmentJourney::new(segments))
}

fn resolve_segment(
    matcher: &RouteMatcher,
    segment: &SegmentRequest,
) -> Result<JourneySegment, Response> {
    let start = matcher
        .stop_by_id(&segment.from)
        .ok_or_else(|| unknown_stop(&segment.from))?;
    let finish = matcher
        .stop_by_id(&segment.to)
        .ok_or_else(|| unknown_stop(&segment.to))?;
    let resolved = match &segment.route {
        Some(route) => matcher.resolve_segment(start, finish, route),
        None => matcher.resolve_segment_between(start, finish),
    };
    resolved.map_err(|err| {
        warn!("{err}");
        (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
    })
}

fn unknown_stop(stop_id: &str) -> Response {
    warn!("Unknown stop {stop_id}");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("Unknown stop {stop_id}"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use andante::network::{Direction, RouteDirection, RouteDirectionId, RouteType, Stop};

    fn direction(
        route_id: &str,
        direction: Direction,
        stop_ids: &[(&str, &str)],
    ) -> RouteDirection {
        let stops: Arc<[Stop]> = stop_ids
            .iter()
            .map(|(id, zone)| Stop::new(*id, *id).with_zone(*zone))
            .collect();
        RouteDirection {
            id: RouteDirectionId::new(route_id, direction),
            short_name: route_id.into(),
            start_stop: stops[0].clone(),
            end_stop: stops[stops.len() - 1].clone(),
            stops,
            route_type: RouteType::Bus,
        }
    }

    fn matcher() -> RouteMatcher {
        RouteMatcher::new(vec![
            direction(
                "200",
                Direction::Zero,
                &[("S1", "A"), ("S2", "B"), ("S3", "C")],
            ),
            direction(
                "200",
                Direction::One,
                &[("S3", "C"), ("S2", "B"), ("S1", "A")],
            ),
        ])
    }

    fn request(segments: &[(Option<&str>, &str, &str)]) -> RecommendationRequest {
        RecommendationRequest {
            segments: segments
                .iter()
                .map(|(route, from, to)| SegmentRequest {
                    route: route.map(str::to_string),
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn segments_without_a_route_are_resolved_from_the_stops() {
        let journey = resolve_journey(&matcher(), &request(&[(None, "S3", "S1")])).unwrap();
        let zones: Vec<&str> = journey.segments[0]
            .route_zones
            .iter()
            .map(|zone| zone.as_str())
            .collect();
        assert_eq!(zones, ["C", "B", "A"]);
    }

    #[test]
    fn unknown_stop_is_unprocessable() {
        let request = request(&[(Some("200"), "S1", "S9")]);
        let err = resolve_journey(&matcher(), &request).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unreachable_stop_pair_is_unprocessable() {
        let request = request(&[(Some("999"), "S1", "S3")]);
        let err = resolve_journey(&matcher(), &request).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn journey_length_is_capped() {
        let err = resolve_journey(&matcher(), &request(&[])).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let legs = vec![(None, "S1", "S3"); MAX_SEGMENTS + 1];
        let err = resolve_journey(&matcher(), &request(&legs)).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
