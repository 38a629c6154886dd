// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    normalize_email, BloodRequest, BloodType, Person, RequestStatus, Role, Sex, UnknownBloodType,
    UnknownVariant, Urgency,
};
pub use requests::{ListRequestsQuery, LoginRequest, NewPerson, NewRequest};
pub use responses::{AuthResponse, ErrorResponse, HealthResponse, MatchesResponse, NotifyResponse};
