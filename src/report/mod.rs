//! Status-store lifecycle and report submission.
//!
//! Completed tasks accumulate in a plain-text append log. `send_report`
//! gathers the log, skips empty reports, submits the rest and clears the log
//! only when the endpoint answers `200`.

pub mod http_client;
pub mod payload;
pub mod sink;
pub mod store;
pub mod workflow;

pub use payload::ReportPayload;
pub use sink::{HttpReportSink, ReportSink};
pub use store::StatusStore;
pub use workflow::{
    ReportOutcome, clear_tasks, get_completed_tasks, record_completed_task, send_report,
};
