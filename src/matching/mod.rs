//! Donor matching, eligibility, and gamification rules.
//!
//! Four pure components carry the business logic: the compatibility table
//! in [`blood`], the ranked matcher in [`ranker`], the 56-day gap rule in
//! [`eligibility`], and the points/badge scheme in [`scoring`]. The
//! [`service`] module composes them over the storage and audit seams so the
//! surrounding platform only ever hands in plain records and persists what
//! comes back.

pub mod blood;
pub mod domain;
pub mod eligibility;
pub mod ranker;
pub mod repository;
pub mod roster;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use blood::{compatible_donor_types, is_compatible, BloodType, InvalidBloodType};
pub use domain::{DonorCandidate, DonorId, MatchQuery, RequestId};
pub use eligibility::{
    check_eligibility, EligibilityReport, FutureDonationDate, MIN_DONATION_GAP_DAYS,
};
pub use ranker::rank;
pub use repository::{
    AuditAction, AuditError, AuditEvent, AuditSink, DonorRecord, DonorRepository, RepositoryError,
};
pub use roster::{parse_roster, RosterImport, RosterSkip};
pub use scoring::{score, Badge, NegativeDonationCount, ScoringInput, ScoringResult};
pub use service::{
    DonationOutcome, DonorMatchService, MatchOutcome, MatchPolicy, MatchServiceError,
};
