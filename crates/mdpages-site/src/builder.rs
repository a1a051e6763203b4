//! One-shot site build orchestration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::assets::{self, MirrorOutcome};
use crate::template::{self, PageData};

/// A download link rendered into the page's downloads section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Human-readable link label.
    pub label: String,
    /// File name within the bundled asset directory.
    pub file: String,
}

/// Configuration for a site build.
#[derive(Debug)]
pub struct BuildConfig {
    /// Page title for the template chrome.
    pub title: String,
    /// README source path.
    pub readme: PathBuf,
    /// Template override; None uses the embedded default.
    pub template: Option<PathBuf>,
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
    /// Source directory of pre-built binaries.
    pub dist_dir: PathBuf,
    /// Drop the README's leading title line before conversion.
    pub skip_title: bool,
    /// Download links for the generated downloads section.
    pub downloads: Vec<DownloadLink>,
}

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Required input file not found: {}", .0.display())]
    MissingInput(PathBuf),
}

/// Result of a completed build, for CLI reporting.
#[derive(Debug)]
pub struct BuildSummary {
    /// Path of the generated HTML page.
    pub page_path: PathBuf,
    /// What happened to the asset bundle.
    pub assets: MirrorOutcome,
}

/// Builds the static site from a README and a binary asset directory.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new builder with the given configuration.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the build: convert, assemble, write, mirror assets.
    ///
    /// All inputs are read before any output is written, so a missing
    /// README or template override aborts without partial page output.
    /// A missing asset directory is reported in the summary, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingInput`] for an absent README or
    /// template override, [`SiteError::Io`] for any other filesystem
    /// failure.
    pub fn build(&self) -> Result<BuildSummary, SiteError> {
        let readme = read_input(&self.config.readme)?;
        let source = if self.config.skip_title {
            strip_leading_line(&readme)
        } else {
            readme.as_str()
        };
        tracing::info!(readme = %self.config.readme.display(), "Converting README");
        let content = mdpages_renderer::convert(source);

        let template_text = match &self.config.template {
            Some(path) => read_input(path)?,
            None => template::DEFAULT_TEMPLATE.to_owned(),
        };

        let dist_name = bundle_dir_name(&self.config.dist_dir);
        let page = PageData {
            title: self.config.title.clone(),
            content,
            downloads: template::downloads_fragment(&self.config.downloads, &dist_name),
        };
        let html = template::assemble(&template_text, &page);

        fs::create_dir_all(&self.config.output_dir)?;
        let page_path = self.config.output_dir.join("index.html");
        fs::write(&page_path, html)?;
        tracing::info!(page = %page_path.display(), "Wrote page");

        let assets = assets::mirror(
            &self.config.dist_dir,
            &self.config.output_dir.join(&dist_name),
        )?;

        Ok(BuildSummary { page_path, assets })
    }
}

/// Read a required input file, mapping absence to [`SiteError::MissingInput`].
fn read_input(path: &Path) -> Result<String, SiteError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(SiteError::MissingInput(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Drop the first line (the README title repeated in the page chrome).
fn strip_leading_line(content: &str) -> &str {
    content.split_once('\n').map_or("", |(_, rest)| rest)
}

/// Bundle directory name within the output tree, taken from the source
/// directory name.
fn bundle_dir_name(dist_dir: &Path) -> String {
    dist_dir
        .file_name()
        .map_or_else(|| "dist".to_owned(), |n| n.to_string_lossy().into_owned())
}
