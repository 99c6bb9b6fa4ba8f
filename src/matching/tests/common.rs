use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::matching::blood::BloodType;
use crate::matching::domain::{DonorCandidate, DonorId, MatchQuery, RequestId};
use crate::matching::repository::{
    AuditError, AuditEvent, AuditSink, DonorRecord, DonorRepository, RepositoryError,
};
use crate::matching::service::{DonorMatchService, MatchPolicy};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn candidate(id: &str, blood_type: BloodType) -> DonorCandidate {
    DonorCandidate {
        donor_id: DonorId(id.to_string()),
        blood_type,
        district: "Dhaka".to_string(),
        upazila: "Savar".to_string(),
        is_verified: false,
        is_available: true,
        total_donations: 0,
    }
}

pub(super) fn record(id: &str, blood_type: BloodType) -> DonorRecord {
    DonorRecord {
        donor_id: DonorId(id.to_string()),
        blood_type,
        district: "Dhaka".to_string(),
        upazila: "Savar".to_string(),
        village: None,
        is_verified: false,
        is_available: true,
        total_donations: 0,
        points: 0,
        badges: Default::default(),
        last_donation_date: None,
    }
}

pub(super) fn query(recipient_type: BloodType) -> MatchQuery {
    MatchQuery {
        recipient_type,
        preferred_district: "Dhaka".to_string(),
        preferred_upazila: "Savar".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<DonorId, DonorRecord>>>,
    pub(super) matches: Arc<Mutex<HashMap<RequestId, Vec<DonorId>>>>,
}

impl MemoryRepository {
    pub(super) fn seed(&self, records: impl IntoIterator<Item = DonorRecord>) {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        for record in records {
            guard.insert(record.donor_id.clone(), record);
        }
    }

    pub(super) fn stored_matches(&self, request: &RequestId) -> Option<Vec<DonorId>> {
        self.matches
            .lock()
            .expect("repository mutex poisoned")
            .get(request)
            .cloned()
    }
}

impl DonorRepository for MemoryRepository {
    fn available_candidates(&self) -> Result<Vec<DonorCandidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<&DonorRecord> = guard.values().collect();
        records.sort_by(|a, b| a.donor_id.cmp(&b.donor_id));
        Ok(records
            .into_iter()
            .filter(|record| record.is_available)
            .map(|record| record.candidate())
            .collect())
    }

    fn fetch(&self, id: &DonorId) -> Result<Option<DonorRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update(&self, record: DonorRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.donor_id.clone(), record);
        Ok(())
    }

    fn store_matches(
        &self,
        request: &RequestId,
        donors: &[DonorId],
    ) -> Result<(), RepositoryError> {
        let mut guard = self.matches.lock().expect("repository mutex poisoned");
        guard.insert(request.clone(), donors.to_vec());
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAudit {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MemoryAudit {
    pub(super) fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit mutex poisoned").clone()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        self.events
            .lock()
            .expect("audit mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    DonorMatchService<MemoryRepository, MemoryAudit>,
    Arc<MemoryRepository>,
    Arc<MemoryAudit>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let audit = Arc::new(MemoryAudit::default());
    let service = DonorMatchService::new(repository.clone(), audit.clone(), MatchPolicy::default());
    (service, repository, audit)
}
