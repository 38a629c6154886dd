use serde::{Deserialize, Serialize};
use crate::models::domain::Person;

/// Issued on login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Person,
}

/// Response for the request matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub matches: Vec<Person>,
    /// Candidates the matcher evaluated; 0 for a closed request
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Acknowledgement of a (simulated) donor notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub notified: bool,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
