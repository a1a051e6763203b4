//! Page assembly and site building.
//!
//! [`SiteBuilder`] runs the whole one-shot build: read the README,
//! convert it to HTML, assemble the page from a template and write it to
//! the output directory, then mirror the pre-built binary bundle next to
//! it. A missing README or template override aborts the build; a missing
//! binary bundle only produces a warning.

mod assets;
mod builder;
mod template;

pub use assets::{MirrorOutcome, mirror};
pub use builder::{BuildConfig, BuildSummary, DownloadLink, SiteBuilder, SiteError};
pub use template::{PageData, assemble};
