use serde::{Deserialize, Serialize};

use super::blood::BloodType;

/// Identifier wrapper for donor profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DonorId(pub String);

/// Identifier wrapper for blood requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

/// Snapshot of a registered donor considered for a match.
///
/// Supplied fresh per call by the persistence layer; the ranker never
/// mutates it, it only filters and reorders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorCandidate {
    pub donor_id: DonorId,
    pub blood_type: BloodType,
    pub district: String,
    pub upazila: String,
    pub is_verified: bool,
    pub is_available: bool,
    pub total_donations: u32,
}

/// What the patient needs and where the unit has to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    pub recipient_type: BloodType,
    pub preferred_district: String,
    pub preferred_upazila: String,
}
