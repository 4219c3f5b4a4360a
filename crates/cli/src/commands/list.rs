//! cosmic-smoke list command

use super::GlobalOptions;
use crate::output;
use clap::Args;
use shared::CheckId;

#[derive(Debug, Args, Default)]
pub struct ListCommand {
    /// Only list the core checks
    #[arg(long)]
    pub core: bool,
}

impl ListCommand {
    pub fn checks(&self) -> Vec<CheckId> {
        if self.core {
            CheckId::core()
        } else {
            CheckId::all()
        }
    }

    pub fn run(&self, options: &GlobalOptions) -> anyhow::Result<()> {
        let checks = self.checks();

        if options.json {
            let listing: Vec<_> = checks
                .iter()
                .map(|id| {
                    serde_json::json!({
                        "id": id,
                        "core": id.is_core(),
                        "description": id.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }

        println!("Available checks:");
        for id in checks {
            println!("{}", output::render_check_listing(id));
        }
        Ok(())
    }
}
