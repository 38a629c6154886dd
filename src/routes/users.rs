use actix_web::{web, HttpRequest, HttpResponse};
use crate::error::ApiError;
use crate::routes::{current_person, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "/users/me" must be registered before the "{id}" pattern
    cfg.route("/users/me", web::get().to(me))
        .route("/users/{id}", web::get().to(get_user));
}

async fn me(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let person = current_person(&http_req, &state).await?;
    Ok(HttpResponse::Ok().json(person))
}

async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let person = state
        .store
        .get_person_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id)))?;

    Ok(HttpResponse::Ok().json(person))
}
