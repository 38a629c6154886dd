use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::core::locality_contains;
use crate::error::ApiError;
use crate::models::{ListRequestsQuery, NewRequest};
use crate::routes::{current_person, ensure_owner, load_request, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/requests", web::get().to(list_requests))
        .route("/requests", web::post().to(create_request))
        .route("/requests/{id}", web::get().to(get_request))
        .route("/requests/{id}/close", web::post().to(close_request));
}

/// List requests, newest first
///
/// GET /api/requests?locality={substring}
async fn list_requests(
    state: web::Data<AppState>,
    query: web::Query<ListRequestsQuery>,
) -> Result<HttpResponse, ApiError> {
    let mut requests = state.store.list_requests().await?;

    if let Some(needle) = query.locality.as_deref() {
        requests.retain(|r| locality_contains(&r.locality, needle));
    }

    Ok(HttpResponse::Ok().json(requests))
}

async fn get_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let request = load_request(&state, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(request))
}

/// Submit a blood request
///
/// POST /api/requests
///
/// Request body:
/// ```json
/// {
///   "patientName": "string",
///   "bloodGroup": "A+",
///   "units": 2,
///   "hospital": "string",
///   "locality": "string",
///   "urgency": "Low|Medium|High"
/// }
/// ```
async fn create_request(
    state: web::Data<AppState>,
    req: web::Json<NewRequest>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let requestor = current_person(&http_req, &state).await?;
    let data = req.into_inner();
    data.validate()?;

    let request = state.store.create_request(&requestor.id, data).await?;

    tracing::info!(
        "Request {} opened by {}: {} x{} in {}",
        request.id,
        requestor.id,
        request.blood_type,
        request.units,
        request.locality
    );

    Ok(HttpResponse::Created().json(request))
}

/// Close a request. Closed requests stay closed.
async fn close_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let viewer = current_person(&http_req, &state).await?;
    let request = load_request(&state, &path.into_inner()).await?;
    ensure_owner(&viewer, &request)?;

    let closed = state.store.close_request(&request.id).await?;
    state.cache.invalidate(&closed.id).await;

    tracing::info!("Request {} closed by {}", closed.id, viewer.id);
    Ok(HttpResponse::Ok().json(closed))
}
