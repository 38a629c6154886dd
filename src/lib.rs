//! RedPulse - blood donation matching service
//!
//! Requestors post blood requests, volunteers register with blood type and
//! locality, and the matcher surfaces compatible local donors per request
//! using the standard ABO/Rh transfusion table.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CompatibilityTable, MatchResult, Matcher};
pub use crate::error::ApiError;
pub use crate::models::{BloodRequest, BloodType, Person, RequestStatus, Role};
pub use crate::services::{MemoryStore, RecordStore, StoreError};
