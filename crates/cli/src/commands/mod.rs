//! CLI Commands

pub mod init;
pub mod list;
pub mod run;

pub use init::InitCommand;
pub use list::ListCommand;
pub use run::RunCommand;

use anyhow::Context;
use shared::{SmokeConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
    pub json: bool,
}

impl GlobalOptions {
    /// Resolve configuration: defaults, then file, then environment, then flags
    ///
    /// Without `--config`, `cosmic-smoke.yaml` in `cwd` is used when present.
    pub fn load_config(&self, cwd: &Path) -> anyhow::Result<SmokeConfig> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                candidate.exists().then_some(candidate)
            }
        };

        let mut config = match path {
            Some(path) => SmokeConfig::from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SmokeConfig::default(),
        };

        config.apply_env();
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        Ok(config)
    }
}
