use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use crate::error::ApiError;
use crate::models::{BloodRequest, MatchesResponse, NotifyResponse};
use crate::routes::{current_person, ensure_owner, load_request, AppState};
use crate::services::CachedMatches;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/requests/{id}/matches", web::get().to(find_matches))
        .route(
            "/requests/{id}/matches/{person_id}/notify",
            web::post().to(notify_donor),
        );
}

/// Run the matcher for a request, going through the match cache
async fn matches_for(state: &AppState, request: &BloodRequest) -> Result<Arc<CachedMatches>, ApiError> {
    // Closed requests bypass the cache: a result computed while the
    // request was still open must never be served after it closed.
    if !request.is_open() {
        let result = state.matcher.find_matches(request, Vec::new());
        return Ok(Arc::new(CachedMatches {
            donors: result.donors,
            total_candidates: result.total_candidates,
            generation: state.cache.generation(),
        }));
    }

    if let Some(hit) = state.cache.get(&request.id).await {
        return Ok(hit);
    }

    let generation = state.cache.generation();
    let candidates = state.store.list_persons().await?;
    let result = state.matcher.find_matches(request, candidates);

    let cached = CachedMatches {
        donors: result.donors,
        total_candidates: result.total_candidates,
        generation,
    };
    Ok(state.cache.insert(&request.id, cached).await)
}

/// Find eligible donors for a request
///
/// GET /api/requests/{id}/matches
///
/// Only the requestor may see the donor list.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let viewer = current_person(&http_req, &state).await?;
    let request = load_request(&state, &path.into_inner()).await?;
    ensure_owner(&viewer, &request)?;

    let matches = matches_for(&state, &request).await?;

    tracing::info!(
        "Returning {} donors for request {} (from {} candidates)",
        matches.donors.len(),
        request.id,
        matches.total_candidates
    );

    Ok(HttpResponse::Ok().json(MatchesResponse {
        request_id: request.id,
        matches: matches.donors.clone(),
        total_candidates: matches.total_candidates,
    }))
}

/// Notify a matched donor about a request
///
/// POST /api/requests/{id}/matches/{person_id}/notify
///
/// Delivery is simulated: the notification is logged, not sent.
async fn notify_donor(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let viewer = current_person(&http_req, &state).await?;
    let (request_id, person_id) = path.into_inner();
    let request = load_request(&state, &request_id).await?;
    ensure_owner(&viewer, &request)?;

    let matches = matches_for(&state, &request).await?;
    let donor = matches
        .donors
        .iter()
        .find(|p| p.id == person_id)
        .ok_or_else(|| {
            ApiError::NotFound(format!("{} is not a current match for request {}", person_id, request.id))
        })?;

    tracing::info!(
        "Simulated notification to {} <{}> for request {}",
        donor.id,
        donor.email,
        request.id
    );

    Ok(HttpResponse::Ok().json(NotifyResponse {
        notified: true,
        message: format!(
            "A notification has been sent to {}'s registered email.",
            donor.name
        ),
    }))
}
