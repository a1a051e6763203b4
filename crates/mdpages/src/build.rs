//! `mdpages` build command implementation.

use std::path::PathBuf;

use clap::Args;
use mdpages_config::{CliSettings, Config};
use mdpages_site::{BuildConfig, DownloadLink, MirrorOutcome, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover mdpages.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// README source path (overrides config).
    #[arg(long)]
    readme: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Binary asset source directory (overrides config).
    #[arg(long)]
    dist_dir: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            readme: self.readme,
            output_dir: self.output_dir,
            dist_dir: self.dist_dir,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let downloads: Vec<DownloadLink> = config
            .download
            .iter()
            .map(|entry| DownloadLink {
                label: entry.label.clone(),
                file: entry.file.clone(),
            })
            .collect();

        let site = config.site_resolved;
        output.info(&format!("Source: {}", site.readme.display()));
        output.info(&format!("Output: {}", site.output_dir.display()));

        let builder = SiteBuilder::new(BuildConfig {
            title: site.title,
            readme: site.readme,
            template: site.template,
            output_dir: site.output_dir,
            dist_dir: site.dist_dir,
            skip_title: site.skip_title,
            downloads,
        });
        let summary = builder.build()?;

        match summary.assets {
            MirrorOutcome::Copied(count) => {
                output.info(&format!("Bundled {count} binary assets"));
            }
            MirrorOutcome::SourceMissing => {
                output.warning("No binary asset directory found, download links will not resolve");
            }
        }
        output.success(&format!(
            "Site generated at {}",
            summary.page_path.display()
        ));
        Ok(())
    }
}
