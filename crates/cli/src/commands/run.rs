//! cosmic-smoke run command

use super::GlobalOptions;
use crate::output;
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use probe::HttpProbe;
use report::RunLog;
use shared::{CheckId, SmokeConfig};
use std::process::ExitCode;
use std::time::Duration;
use suite::{RunEvent, SmokeRunner};
use tracing::info;

#[derive(Debug, Args, Default)]
pub struct RunCommand {
    /// Run only the named check (repeatable)
    #[arg(short = 'k', long = "check", value_name = "CHECK")]
    pub checks: Vec<CheckId>,

    /// Run the extended checks as well as the core ones
    #[arg(long)]
    pub extended: bool,

    /// Wait after the sample import, in milliseconds
    #[arg(long, value_name = "MS")]
    pub settle_ms: Option<u64>,
}

impl RunCommand {
    /// Checks to run, in order, without duplicates
    pub fn select_checks(&self, config: &SmokeConfig) -> Vec<CheckId> {
        let requested = if !self.checks.is_empty() {
            self.checks.clone()
        } else if self.extended {
            CheckId::all()
        } else {
            config.checks.clone()
        };

        let mut selected = Vec::with_capacity(requested.len());
        for id in requested {
            if !selected.contains(&id) {
                selected.push(id);
            }
        }
        selected
    }

    pub async fn run(&self, options: &GlobalOptions) -> anyhow::Result<ExitCode> {
        let cwd = std::env::current_dir().context("Cannot determine working directory")?;
        let mut config = options.load_config(&cwd)?;
        if let Some(ms) = self.settle_ms {
            config.import_settle_ms = ms;
        }
        config.validate()?;

        let ids = self.select_checks(&config);
        let probe = HttpProbe::from_config(&config)?;
        let runner = SmokeRunner::from_config(&config, &ids);
        let mut log = RunLog::default();

        let names: Vec<&str> = runner.check_ids().iter().map(|id| id.as_str()).collect();
        info!(base_url = %probe.base_url(), checks = %names.join(","), run_id = %log.run_id(), "starting smoke run");

        if options.json {
            runner.run(&probe, &mut log).await;
            println!("{}", serde_json::to_string_pretty(&log.export_json())?);
        } else {
            let spinner = progress_spinner();
            runner
                .run_with(&probe, &mut log, |event| match event {
                    RunEvent::Started(id) => spinner.set_message(format!("{}", id)),
                    RunEvent::Finished(record) => spinner.println(output::render_record(record)),
                })
                .await;
            spinner.finish_and_clear();
            println!("{}", output::render_summary(&log.stats(), probe.base_url().as_str()));
        }

        Ok(if log.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

fn progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
