//! cosmic-smoke init command

use anyhow::bail;
use clap::Args;
use shared::{SmokeConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

const HEADER: &str = "\
# cosmic-smoke configuration
#
# baseUrl can also be set with COSMIC_BASE_URL or --base-url.
# checks lists what `cosmic-smoke run` executes by default; see `cosmic-smoke list`.
";

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the config file into
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let path = self.write_default()?;
        println!("✓ Wrote {}", path.display());
        Ok(())
    }

    /// Write the default configuration, returning its path
    pub fn write_default(&self) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(DEFAULT_CONFIG_FILE);
        if path.exists() && !self.force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }

        let body = serde_yaml::to_string(&SmokeConfig::default())?;
        std::fs::write(&path, format!("{}{}", HEADER, body))?;
        Ok(path)
    }
}
