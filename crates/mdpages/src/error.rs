//! CLI error types.

use mdpages_config::ConfigError;
use mdpages_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),
}
