use super::payload::ReportPayload;
use super::sink::ReportSink;
use super::store::StatusStore;
use crate::config::Config;
use crate::error::StoreError;
use std::fmt;

/// Only status the endpoint treats as accepted.
pub const ACCEPTED_STATUS: u16 = 200;

/// How a `send_report` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The store was empty; nothing was sent and nothing was touched.
    Skipped,
    /// The endpoint accepted the report and the store was cleared.
    Cleared { status: u16 },
    /// Submission failed; the store is intact for the next attempt.
    /// `status` is `None` when no HTTP response was received.
    Uncleared { status: Option<u16>, reason: String },
}

impl ReportOutcome {
    pub fn cleared(&self) -> bool {
        matches!(self, Self::Cleared { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Skipped => None,
            Self::Cleared { status } => Some(*status),
            Self::Uncleared { status, .. } => *status,
        }
    }
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped: nothing to report"),
            Self::Cleared { status } => {
                write!(f, "report sent (HTTP {status}), completed tasks cleared")
            }
            Self::Uncleared { reason, .. } => {
                write!(f, "report not accepted ({reason}), completed tasks kept")
            }
        }
    }
}

pub fn record_completed_task(config: &Config, task_body: &str) -> Result<(), StoreError> {
    StatusStore::new(config.status_path()).append(task_body)
}

/// Full status-store content, `""` when there is none or it can't be read.
pub fn get_completed_tasks(config: &Config) -> String {
    StatusStore::new(config.status_path()).read_all()
}

pub fn clear_tasks(config: &Config) -> Result<(), StoreError> {
    StatusStore::new(config.status_path()).clear()
}

/// Gather, skip if empty, submit once, clear only on `200`.
///
/// Submission failures come back as [`ReportOutcome::Uncleared`]; the only
/// error is a store that cannot be cleared after an accepted report. A store
/// that vanished between submit and clear counts as cleared.
pub async fn send_report(
    config: &Config,
    sink: &dyn ReportSink,
) -> Result<ReportOutcome, StoreError> {
    let store = StatusStore::new(config.status_path());

    let completed = store.read_all();
    if completed.is_empty() {
        tracing::info!(
            path = %store.path().display(),
            "no completed tasks recorded, not sending report"
        );
        return Ok(ReportOutcome::Skipped);
    }

    let payload = ReportPayload::for_config(config, completed);
    let status = match sink.submit(&payload).await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(error = %e, "report submission failed, keeping completed tasks");
            return Ok(ReportOutcome::Uncleared {
                status: None,
                reason: e.to_string(),
            });
        }
    };

    if status != ACCEPTED_STATUS {
        tracing::warn!(status, "report endpoint did not accept report, keeping completed tasks");
        return Ok(ReportOutcome::Uncleared {
            status: Some(status),
            reason: format!("endpoint responded with HTTP {status}"),
        });
    }

    match store.clear() {
        Ok(()) => {}
        Err(e) if e.io_kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                path = %store.path().display(),
                "status store already gone after report was accepted"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "report accepted but status store could not be cleared");
            return Err(e);
        }
    }

    tracing::info!(status, "report accepted, completed tasks cleared");
    Ok(ReportOutcome::Cleared { status })
}
