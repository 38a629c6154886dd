use async_trait::async_trait;
use thiserror::Error;
use crate::models::{BloodRequest, NewPerson, NewRequest, Person};

/// Errors that can occur in a record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request {0} is already closed")]
    AlreadyClosed(String),

    /// Stored data violates a domain invariant, e.g. an unknown blood type
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Persistence collaborator for persons and blood requests
///
/// Implementations must return snapshots: callers hand the returned
/// vectors to the matcher and expect them not to change underneath it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short name for logs and health output
    fn backend_tag(&self) -> &'static str;

    async fn get_request_by_id(&self, id: &str) -> Result<Option<BloodRequest>, StoreError>;

    /// All requests, newest first
    async fn list_requests(&self) -> Result<Vec<BloodRequest>, StoreError>;

    /// Assigns an id and creation time; status starts Open
    async fn create_request(
        &self,
        requestor_id: &str,
        data: NewRequest,
    ) -> Result<BloodRequest, StoreError>;

    /// Open -> Closed. Fails with `AlreadyClosed` for a closed request.
    async fn close_request(&self, id: &str) -> Result<BloodRequest, StoreError>;

    async fn list_persons(&self) -> Result<Vec<Person>, StoreError>;

    async fn get_person_by_id(&self, id: &str) -> Result<Option<Person>, StoreError>;

    /// Email lookup, trimmed and case-insensitive
    async fn find_person_by_email(&self, email: &str) -> Result<Option<Person>, StoreError>;

    /// Assigns an id and zero donations. Fails with `DuplicateEmail` and
    /// leaves the existing record untouched when the email is taken.
    async fn register_person(&self, data: NewPerson) -> Result<Person, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
