use crate::cli::Commands;
use crate::config::Config;
use crate::report::{HttpReportSink, ReportOutcome, record_completed_task, send_report};
use anyhow::{Context, Result, bail};
use std::process::ExitCode;

/// Run one subcommand against an already-validated configuration.
pub async fn dispatch(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::TaskComplete { task_body } => {
            let task_body = task_body.join(" ");
            if task_body.trim().is_empty() {
                bail!("task description must not be empty");
            }
            record_completed_task(config, &task_body).with_context(|| {
                format!("failed to record task in {}", config.status_path().display())
            })?;
            tracing::debug!(task = %task_body, "task recorded");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Report => {
            let sink = HttpReportSink::from_config(config);
            let outcome = send_report(config, &sink)
                .await
                .context("report was accepted but the status store could not be cleared")?;
            println!("{outcome}");
            Ok(exit_code_for(&outcome))
        }
    }
}

/// Non-zero only when tasks remain unsent.
pub fn exit_code_for(outcome: &ReportOutcome) -> ExitCode {
    match outcome {
        ReportOutcome::Skipped | ReportOutcome::Cleared { .. } => ExitCode::SUCCESS,
        ReportOutcome::Uncleared { .. } => ExitCode::FAILURE,
    }
}
