use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::blood::BloodType;
use super::domain::{DonorCandidate, DonorId, RequestId};
use super::scoring::Badge;

/// Stored donor profile including the persisted gamification state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub donor_id: DonorId,
    pub blood_type: BloodType,
    pub district: String,
    pub upazila: String,
    pub village: Option<String>,
    pub is_verified: bool,
    pub is_available: bool,
    pub total_donations: u32,
    pub points: u64,
    pub badges: BTreeSet<Badge>,
    pub last_donation_date: Option<NaiveDate>,
}

impl DonorRecord {
    /// View of the record handed to the ranker.
    pub fn candidate(&self) -> DonorCandidate {
        DonorCandidate {
            donor_id: self.donor_id.clone(),
            blood_type: self.blood_type,
            district: self.district.clone(),
            upazila: self.upazila.clone(),
            is_verified: self.is_verified,
            is_available: self.is_available,
            total_donations: self.total_donations,
        }
    }

    /// A profile counts as complete once both location fields are filled in.
    /// The blood group is always present in a typed record.
    pub fn has_complete_profile(&self) -> bool {
        !self.district.trim().is_empty() && !self.upazila.trim().is_empty()
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// The real implementation lives with the surrounding platform.
pub trait DonorRepository: Send + Sync {
    /// All donors currently flagged available, as ranker-ready candidates.
    fn available_candidates(&self) -> Result<Vec<DonorCandidate>, RepositoryError>;
    fn fetch(&self, id: &DonorId) -> Result<Option<DonorRecord>, RepositoryError>;
    fn update(&self, record: DonorRecord) -> Result<(), RepositoryError>;
    /// Persist the ranked donor-id list onto the stored blood request.
    fn store_matches(&self, request: &RequestId, donors: &[DonorId])
        -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Moderation-relevant actions recorded for organization admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    DonorsMatched,
    DonationRecorded,
    DonorVerified,
    DonorUnverified,
    DonorImported,
}

impl AuditAction {
    pub const fn label(self) -> &'static str {
        match self {
            AuditAction::DonorsMatched => "donors_matched",
            AuditAction::DonationRecorded => "donation_recorded",
            AuditAction::DonorVerified => "donor_verified",
            AuditAction::DonorUnverified => "donor_unverified",
            AuditAction::DonorImported => "donor_imported",
        }
    }
}

/// Audit trail entry handed to the surrounding platform for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub target_donor: Option<DonorId>,
    pub details: String,
    pub metadata: BTreeMap<String, String>,
}

/// Outbound audit hook (e.g., the platform's audit-log collection).
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError>;
}

/// Audit dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit sink unavailable: {0}")]
    Transport(String),
}
