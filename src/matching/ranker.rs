use std::cmp::Reverse;

use super::blood::compatible_donor_types;
use super::domain::{DonorCandidate, MatchQuery};

/// Filter candidates to compatible, available donors and rank them.
///
/// The tie-break chain is strict and applied in order: same district as the
/// request, same upazila, verified before unverified, then higher lifetime
/// donation count. Candidates equal on all four criteria keep their input
/// order (the sort is stable). An empty or fully-incompatible pool yields an
/// empty list, not an error.
pub fn rank(query: &MatchQuery, candidates: Vec<DonorCandidate>) -> Vec<DonorCandidate> {
    let compatible = compatible_donor_types(query.recipient_type);

    let mut matched: Vec<DonorCandidate> = candidates
        .into_iter()
        .filter(|candidate| candidate.is_available && compatible.contains(&candidate.blood_type))
        .collect();

    matched.sort_by_key(|candidate| ranking_key(candidate, query));
    matched
}

/// Lower keys sort first, so each criterion is expressed as a "mismatch" flag.
fn ranking_key(candidate: &DonorCandidate, query: &MatchQuery) -> (bool, bool, bool, Reverse<u32>) {
    (
        !same_place(&candidate.district, &query.preferred_district),
        !same_place(&candidate.upazila, &query.preferred_upazila),
        !candidate.is_verified,
        Reverse(candidate.total_donations),
    )
}

fn same_place(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
