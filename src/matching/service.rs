use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::blood::{compatible_donor_types, BloodType};
use super::domain::{DonorCandidate, DonorId, MatchQuery, RequestId};
use super::eligibility::{check_eligibility, EligibilityReport, FutureDonationDate};
use super::ranker::rank;
use super::repository::{
    AuditAction, AuditError, AuditEvent, AuditSink, DonorRecord, DonorRepository, RepositoryError,
};
use super::scoring::{score, Badge, NegativeDonationCount, ScoringInput};

/// Caps applied when persisting match results.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    pub match_limit: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self { match_limit: 20 }
    }
}

/// Ranked match list produced for a blood request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub recipient_type: BloodType,
    pub compatible_types: Vec<BloodType>,
    pub total_matched: usize,
    pub donors: Vec<DonorCandidate>,
}

/// Refreshed gamification state after a donation is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationOutcome {
    pub donor_id: DonorId,
    pub total_donations: u32,
    pub points: u64,
    pub badges: BTreeSet<Badge>,
}

/// Service composing the ranker, scoring engine, and eligibility rule over
/// the repository and audit seams. All I/O stays behind the two traits.
pub struct DonorMatchService<R, A> {
    repository: Arc<R>,
    audit: Arc<A>,
    policy: MatchPolicy,
}

impl<R, A> DonorMatchService<R, A>
where
    R: DonorRepository + 'static,
    A: AuditSink + 'static,
{
    pub fn new(repository: Arc<R>, audit: Arc<A>, policy: MatchPolicy) -> Self {
        Self {
            repository,
            audit,
            policy,
        }
    }

    /// Rank compatible donors for a request and persist the match list.
    pub fn match_donors(
        &self,
        request_id: &RequestId,
        query: &MatchQuery,
    ) -> Result<MatchOutcome, MatchServiceError> {
        let candidates = self.repository.available_candidates()?;
        let mut ranked = rank(query, candidates);
        ranked.truncate(self.policy.match_limit);

        let donor_ids: Vec<DonorId> = ranked
            .iter()
            .map(|candidate| candidate.donor_id.clone())
            .collect();
        self.repository.store_matches(request_id, &donor_ids)?;

        let mut metadata = BTreeMap::new();
        metadata.insert(
            "recipient_type".to_string(),
            query.recipient_type.to_string(),
        );
        metadata.insert("matched".to_string(), ranked.len().to_string());
        self.audit.record(AuditEvent {
            action: AuditAction::DonorsMatched,
            target_donor: None,
            details: format!(
                "matched {} donor(s) for request {}",
                ranked.len(),
                request_id.0
            ),
            metadata,
        })?;

        info!(
            recipient_type = %query.recipient_type,
            matched = ranked.len(),
            "ranked donors for blood request"
        );

        Ok(MatchOutcome {
            recipient_type: query.recipient_type,
            compatible_types: compatible_donor_types(query.recipient_type).to_vec(),
            total_matched: ranked.len(),
            donors: ranked,
        })
    }

    /// Record a completed donation and refresh the donor's gamification state.
    pub fn record_donation(
        &self,
        donor_id: &DonorId,
        donation_date: NaiveDate,
    ) -> Result<DonationOutcome, MatchServiceError> {
        let mut record = self
            .repository
            .fetch(donor_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.total_donations += 1;
        record.last_donation_date = Some(donation_date);
        self.rescore(&mut record)?;

        let outcome = DonationOutcome {
            donor_id: record.donor_id.clone(),
            total_donations: record.total_donations,
            points: record.points,
            badges: record.badges.clone(),
        };
        self.repository.update(record)?;

        self.audit.record(AuditEvent {
            action: AuditAction::DonationRecorded,
            target_donor: Some(donor_id.clone()),
            details: format!("recorded donation for donor on {donation_date}"),
            metadata: BTreeMap::new(),
        })?;

        Ok(outcome)
    }

    /// Register roster-imported donors, give each an initial score, and
    /// leave a single audit entry for the batch.
    pub fn import_donors(
        &self,
        records: Vec<DonorRecord>,
    ) -> Result<usize, MatchServiceError> {
        let count = records.len();
        for mut record in records {
            self.rescore(&mut record)?;
            self.repository.update(record)?;
        }

        self.audit.record(AuditEvent {
            action: AuditAction::DonorImported,
            target_donor: None,
            details: format!("imported {count} donor(s) from roster"),
            metadata: BTreeMap::new(),
        })?;

        Ok(count)
    }

    /// Flip the admin verification flag and rescore the profile.
    pub fn set_verified(
        &self,
        donor_id: &DonorId,
        verified: bool,
    ) -> Result<DonorRecord, MatchServiceError> {
        let mut record = self
            .repository
            .fetch(donor_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.is_verified = verified;
        self.rescore(&mut record)?;
        self.repository.update(record.clone())?;

        let action = if verified {
            AuditAction::DonorVerified
        } else {
            AuditAction::DonorUnverified
        };
        self.audit.record(AuditEvent {
            action,
            target_donor: Some(donor_id.clone()),
            details: format!("donor verification set to {verified}"),
            metadata: BTreeMap::new(),
        })?;

        Ok(record)
    }

    /// Evaluate the 56-day gap rule against the stored last-donation date.
    pub fn eligibility(
        &self,
        donor_id: &DonorId,
        today: NaiveDate,
    ) -> Result<EligibilityReport, MatchServiceError> {
        let record = self
            .repository
            .fetch(donor_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(check_eligibility(record.last_donation_date, today)?)
    }

    fn rescore(&self, record: &mut DonorRecord) -> Result<(), MatchServiceError> {
        let result = score(&ScoringInput {
            total_donations: i64::from(record.total_donations),
            is_verified: record.is_verified,
            is_available: record.is_available,
            has_complete_profile: record.has_complete_profile(),
        })?;
        record.points = result.points;
        record.badges = result.badges;
        Ok(())
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Audit(#[from] AuditError),
    #[error(transparent)]
    Scoring(#[from] NegativeDonationCount),
    #[error(transparent)]
    Eligibility(#[from] FutureDonationDate),
}
