//! SmokeRunner - runs checks one after another and records verdicts

use crate::checks::{build_check, SmokeCheck};
use probe::Transport;
use report::{CheckRecord, RunLog};
use shared::{CheckId, SmokeConfig};
use std::time::Instant;
use tracing::{info, warn};

/// Progress notification emitted while a run is in flight
#[derive(Debug)]
pub enum RunEvent<'a> {
    Started(CheckId),
    Finished(&'a CheckRecord),
}

/// Sequential smoke runner
#[derive(Default)]
pub struct SmokeRunner {
    checks: Vec<Box<dyn SmokeCheck>>,
}

impl SmokeRunner {
    /// Create an empty runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner for `ids`, in the given order, parameterised by `config`
    pub fn from_config(config: &SmokeConfig, ids: &[CheckId]) -> Self {
        Self {
            checks: ids.iter().map(|id| build_check(*id, config)).collect(),
        }
    }

    /// Append a check
    pub fn with_check(mut self, check: Box<dyn SmokeCheck>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn check_ids(&self) -> Vec<CheckId> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check, recording each verdict into `log`
    pub async fn run(&self, transport: &dyn Transport, log: &mut RunLog) {
        self.run_with(transport, log, |_| {}).await
    }

    /// Run every check, reporting progress to `observer`
    ///
    /// A failing check never stops the ones after it.
    pub async fn run_with<F>(&self, transport: &dyn Transport, log: &mut RunLog, mut observer: F)
    where
        F: FnMut(RunEvent<'_>),
    {
        for check in &self.checks {
            let id = check.id();
            observer(RunEvent::Started(id));

            let started = Instant::now();
            let outcome = check.run(transport).await;
            let elapsed = started.elapsed();

            let record = match outcome {
                Ok(()) => {
                    info!(check = %id, elapsed_ms = elapsed.as_millis() as u64, "check passed");
                    CheckRecord::pass(id, elapsed)
                }
                Err(e) => {
                    warn!(check = %id, elapsed_ms = elapsed.as_millis() as u64, error = %e, "check failed");
                    CheckRecord::fail(id, elapsed, e.to_string())
                }
            };

            observer(RunEvent::Finished(&record));
            log.record(record);
        }
    }
}
