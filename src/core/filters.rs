use crate::core::compatibility::CompatibilityTable;
use crate::models::{BloodRequest, Person};

/// Stage 1: only Volunteer or Both may donate
#[inline]
pub fn is_donor_role(person: &Person) -> bool {
    person.role.can_donate()
}

/// Stage 2: the requestor never matches their own request
#[inline]
pub fn is_not_requestor(person: &Person, request: &BloodRequest) -> bool {
    person.id != request.requestor_id
}

/// Stage 3: donor blood type must be permitted for the request's recipient type
#[inline]
pub fn is_blood_compatible(
    person: &Person,
    request: &BloodRequest,
    table: &CompatibilityTable,
) -> bool {
    table.can_donate(person.blood_type, request.blood_type)
}

/// Stage 4: exact locality match. "Downtown East" is not "Downtown".
#[inline]
pub fn matches_locality(person: &Person, locality: &str) -> bool {
    person.locality == locality
}

/// Case-insensitive substring search over a locality string
///
/// This is the listing/search convenience only. Matching uses
/// [`matches_locality`].
pub fn locality_contains(locality: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || locality.to_lowercase().contains(&needle.to_lowercase())
}
