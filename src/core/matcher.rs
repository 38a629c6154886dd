use crate::models::{BloodRequest, Person};
use crate::core::{
    compatibility::CompatibilityTable,
    filters::{is_blood_compatible, is_donor_role, is_not_requestor, matches_locality},
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub donors: Vec<Person>,
    /// Candidates the pipeline evaluated; 0 for a closed request
    pub total_candidates: usize,
}

/// Donor matcher - a filtering pipeline over the candidate catalogue
///
/// # Pipeline Stages
/// 0. Closed requests short-circuit to no donors
/// 1. Role filter (Volunteer or Both)
/// 2. Requestor exclusion
/// 3. Blood type compatibility
/// 4. Exact locality
///
/// The order of `donors` follows the candidate order. Callers that need a
/// particular ordering sort the result themselves.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    table: &'static CompatibilityTable,
}

impl Matcher {
    pub fn new(table: &'static CompatibilityTable) -> Self {
        Self { table }
    }

    pub fn with_standard_table() -> Self {
        Self::new(CompatibilityTable::standard())
    }

    /// Find every eligible donor for a request
    ///
    /// # Arguments
    /// * `request` - The blood request being served
    /// * `candidates` - A stable snapshot of the person catalogue
    pub fn find_matches(&self, request: &BloodRequest, candidates: Vec<Person>) -> MatchResult {
        if !request.is_open() {
            tracing::debug!("Request {} is {:?}, no matches", request.id, request.status);
            return MatchResult {
                donors: Vec::new(),
                total_candidates: 0,
            };
        }

        let total_candidates = candidates.len();

        let donors: Vec<Person> = candidates
            .into_iter()
            .filter(|person| self.passes_filters(request, person))
            .collect();

        tracing::debug!(
            "Request {} ({} in {}): {} of {} candidates eligible",
            request.id,
            request.blood_type,
            request.locality,
            donors.len(),
            total_candidates
        );

        MatchResult {
            donors,
            total_candidates,
        }
    }

    /// The full predicate for one candidate, including the open-status check
    pub fn is_match(&self, request: &BloodRequest, person: &Person) -> bool {
        request.is_open() && self.passes_filters(request, person)
    }

    #[inline]
    fn passes_filters(&self, request: &BloodRequest, person: &Person) -> bool {
        is_donor_role(person)
            && is_not_requestor(person, request)
            && is_blood_compatible(person, request, self.table)
            && matches_locality(person, &request.locality)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_standard_table()
    }
}
