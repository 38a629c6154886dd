// Route exports
pub mod auth;
pub mod health;
pub mod matches;
pub mod requests;
pub mod users;

use actix_web::{web, HttpRequest};
use std::sync::Arc;
use crate::core::Matcher;
use crate::error::{handle_json_payload_error, handle_query_payload_error, ApiError};
use crate::models::{BloodRequest, Person};
use crate::services::{MatchCache, RecordStore, TokenIssuer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub cache: Arc<MatchCache>,
    pub matcher: Matcher,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, cache: MatchCache, tokens: TokenIssuer) -> Self {
        Self {
            store,
            cache: Arc::new(cache),
            matcher: Matcher::default(),
            tokens: Arc::new(tokens),
        }
    }
}

/// Payload error handlers plus every route
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error));
    configure_routes(cfg);
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(auth::configure)
            .configure(users::configure)
            .configure(matches::configure)
            .configure(requests::configure),
    );
}

/// Resolve the bearer token on the request to a registered person
pub(crate) async fn current_person(req: &HttpRequest, state: &AppState) -> Result<Person, ApiError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = TokenIssuer::bearer(header)?;
    let person_id = state.tokens.verify(token)?;

    state
        .store
        .get_person_by_id(&person_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(format!("unknown account {}", person_id)))
}

pub(crate) async fn load_request(state: &AppState, id: &str) -> Result<BloodRequest, ApiError> {
    state
        .store
        .get_request_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Request {} not found", id)))
}

/// Only the person who posted a request may manage it or see its donors
pub(crate) fn ensure_owner(viewer: &Person, request: &BloodRequest) -> Result<(), ApiError> {
    if viewer.id == request.requestor_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "Only the requestor may manage request {}",
            request.id
        )))
    }
}
