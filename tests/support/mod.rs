use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use toucan::record::{JobRecord, RecordId};
use toucan::sync::{JobSource, NetworkError};

/// In-memory job service that counts calls and can be told to fail.
#[derive(Default)]
pub struct FakeJobSource {
    jobs: Mutex<Option<Vec<JobRecord>>>,
    fail_fetch: AtomicBool,
    fail_delete: AtomicBool,
    fetch_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeJobSource {
    pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        let source = Self::default();
        source.set_jobs(Some(jobs));
        source
    }

    pub fn set_jobs(&self, jobs: Option<Vec<JobRecord>>) {
        *self.jobs.lock().expect("jobs lock") = jobs;
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.fetch_calls() + self.delete_calls()
    }

    pub fn remote_ids(&self) -> Vec<RecordId> {
        self.jobs
            .lock()
            .expect("jobs lock")
            .as_ref()
            .map(|jobs| jobs.iter().map(|job| job.id).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl JobSource for FakeJobSource {
    async fn fetch_all(&self) -> Result<Option<Vec<JobRecord>>, NetworkError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(NetworkError::Request("connection refused".to_string()));
        }
        Ok(self.jobs.lock().expect("jobs lock").clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), NetworkError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(NetworkError::Status {
                status: 500,
                body: "database is locked".to_string(),
            });
        }
        let mut guard = self.jobs.lock().expect("jobs lock");
        let Some(jobs) = guard.as_mut() else {
            return Err(NetworkError::NotFound(id));
        };
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        if jobs.len() == before {
            return Err(NetworkError::NotFound(id));
        }
        Ok(())
    }
}

#[allow(dead_code)]
pub fn job(id: RecordId, company: &str, status: &str, date: Option<&str>) -> JobRecord {
    JobRecord::new(id, company, "Software Engineer", status, date)
}

#[allow(dead_code)]
pub fn sample_jobs() -> Vec<JobRecord> {
    vec![
        job(1, "Acme Corp.", "Applied", Some("2024-01-10")),
        job(2, "Globex", "Interviewing", Some("2024-02-03")),
        job(3, "Initech, LLC", "Offer Extended", Some("2024-03-15")),
        job(4, "Hooli", "applied", None),
        job(5, "Pied Piper, Inc.", "Rejected", Some("2024-02-20")),
    ]
}

#[allow(dead_code)]
pub fn ids(records: &[JobRecord]) -> Vec<RecordId> {
    records.iter().map(|record| record.id).collect()
}
