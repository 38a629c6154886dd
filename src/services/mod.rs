// Service exports
pub mod auth;
pub mod cache;
pub mod memory;
pub mod postgres;
pub mod store;

pub use auth::{AuthError, Claims, TokenIssuer};
pub use cache::{CachedMatches, MatchCache};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{RecordStore, StoreError};
