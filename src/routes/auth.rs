use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, NewPerson};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login));
}

/// Register endpoint
///
/// POST /api/auth/register
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "phone": "string",
///   "bloodGroup": "O-",
///   "sex": "Male|Female|Other",
///   "locality": "string",
///   "role": "Requestor|Volunteer|Both"
/// }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<NewPerson>,
) -> Result<HttpResponse, ApiError> {
    let data = req.into_inner();
    data.validate()?;

    let person = match state.store.register_person(data).await {
        Ok(person) => person,
        Err(e) => {
            tracing::info!("Registration rejected: {}", e);
            return Err(e.into());
        }
    };

    // A new volunteer can change any request's donor set
    state.cache.invalidate_all();

    let token = state.tokens.issue(&person.id)?;
    tracing::info!("Registered {} as {}", person.id, person.role.as_str());

    Ok(HttpResponse::Created().json(AuthResponse { token, user: person }))
}

/// Login endpoint
///
/// POST /api/auth/login
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let person = state
        .store
        .find_person_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("no account for this email".to_string()))?;

    let token = state.tokens.issue(&person.id)?;
    tracing::debug!("Issued token for {}", person.id);

    Ok(HttpResponse::Ok().json(AuthResponse { token, user: person }))
}
