// Core algorithm exports
pub mod compatibility;
pub mod filters;
pub mod matcher;

pub use compatibility::CompatibilityTable;
pub use filters::{is_blood_compatible, is_donor_role, is_not_requestor, locality_contains, matches_locality};
pub use matcher::{MatchResult, Matcher};
