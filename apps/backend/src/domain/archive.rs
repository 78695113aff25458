//! Simulated archive export job.
//!
//! There is no background worker: a poll *is* the tick. Every call to
//! [`Archiver::get_or_advance`] after the first moves the job one unit
//! forward, and a step past [`MAX_PROGRESS_UNITS`] wraps the job back to
//! zero in the same step. No file is produced; the download route serves a
//! placeholder under [`EXPORT_ARTIFACT_NAME`].

use std::fmt;

use parking_lot::Mutex;
use serde::Serialize;

/// Progress units at which the job reports `Complete`.
pub const MAX_PROGRESS_UNITS: u8 = 10;

/// File name the export is offered under.
pub const EXPORT_ARTIFACT_NAME: &str = "archive.json";

/// Opaque identifier of the user that started the job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self("anonymous".to_string())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArchiveStatus {
    Waiting,
    Running,
    Complete,
}

impl ArchiveStatus {
    pub const fn from_progress(units: u8) -> Self {
        match units {
            0 => Self::Waiting,
            MAX_PROGRESS_UNITS => Self::Complete,
            _ => Self::Running,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Running => "Running",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for ArchiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the archive job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveJob {
    owner_id: OwnerId,
    progress_units: u8,
}

impl ArchiveJob {
    fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            progress_units: 0,
        }
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Always within `0..=MAX_PROGRESS_UNITS`.
    pub fn progress_units(&self) -> u8 {
        self.progress_units
    }

    pub fn status(&self) -> ArchiveStatus {
        ArchiveStatus::from_progress(self.progress_units)
    }

    pub fn fraction(&self) -> f64 {
        f64::from(self.progress_units) / f64::from(MAX_PROGRESS_UNITS)
    }

    // Wrap on exceed, not on reach: 10 is observable, 11 never is.
    fn advance(&mut self) {
        let next = self.progress_units + 1;
        self.progress_units = if next > MAX_PROGRESS_UNITS { 0 } else { next };
    }

    fn reset(&mut self) {
        self.progress_units = 0;
    }
}

/// Process-wide holder of the single archive job.
///
/// One instance lives in `AppState`; the mutex guards the read-modify-write
/// of the advance step across actix workers.
#[derive(Debug, Default)]
pub struct Archiver {
    job: Mutex<Option<ArchiveJob>>,
}

impl Archiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the job, creating it for the default owner on first access.
    ///
    /// The first call returns the fresh job untouched. Every later call
    /// advances the job by one unit before returning it, so reading here is
    /// never side-effect free. Use [`Archiver::peek`] for a pure read.
    pub fn get_or_advance(&self) -> ArchiveJob {
        self.get_or_advance_as(OwnerId::default())
    }

    /// Like [`Archiver::get_or_advance`]; `owner` is only recorded when this
    /// call creates the job.
    pub fn get_or_advance_as(&self, owner: OwnerId) -> ArchiveJob {
        let mut slot = self.job.lock();
        match slot.as_mut() {
            Some(job) => {
                job.advance();
                job.clone()
            }
            None => slot.insert(ArchiveJob::new(owner)).clone(),
        }
    }

    /// Rewind progress to zero. A no-op before the job exists.
    pub fn reset(&self) {
        if let Some(job) = self.job.lock().as_mut() {
            job.reset();
        }
    }

    pub fn peek(&self) -> Option<ArchiveJob> {
        self.job.lock().clone()
    }

    pub fn status_label(&self) -> ArchiveStatus {
        self.job
            .lock()
            .as_ref()
            .map_or(ArchiveStatus::Waiting, ArchiveJob::status)
    }

    pub fn fraction(&self) -> f64 {
        self.job.lock().as_ref().map_or(0.0, ArchiveJob::fraction)
    }

    pub fn export_artifact_name(&self) -> &'static str {
        EXPORT_ARTIFACT_NAME
    }
}
