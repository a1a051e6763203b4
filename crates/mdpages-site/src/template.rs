//! Page template assembly.
//!
//! Literal placeholder substitution only: each placeholder is replaced
//! once with its content, verbatim. No escaping, no recursion, no
//! conditionals.

use std::fmt::Write;

use crate::builder::DownloadLink;

/// Embedded default page template, used when the config names no override.
pub(crate) const DEFAULT_TEMPLATE: &str = include_str!("page.html");

/// Content for the template's insertion points.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    /// Substituted at `{{title}}`.
    pub title: String,
    /// Substituted at `{{content}}`.
    pub content: String,
    /// Substituted at `{{downloads}}`.
    pub downloads: String,
}

/// Substitute the page data into the template.
#[must_use]
pub fn assemble(template: &str, page: &PageData) -> String {
    template
        .replace("{{title}}", &page.title)
        .replace("{{downloads}}", &page.downloads)
        .replace("{{content}}", &page.content)
}

/// Build the downloads section fragment from the configured link entries.
///
/// `dist_name` is the bundle directory name within the output tree.
/// Returns an empty fragment when no entries are configured.
#[must_use]
pub(crate) fn downloads_fragment(links: &[DownloadLink], dist_name: &str) -> String {
    if links.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"download-section\">\n");
    html.push_str("<h2>Download Pre-built Binaries</h2>\n");
    html.push_str("<p>Choose the binary for your operating system:</p>\n");
    html.push_str("<div class=\"download-links\">\n");
    for link in links {
        let _ = writeln!(
            html,
            "<a href=\"{dist_name}/{}\" class=\"download-link\" download>{}</a>",
            link.file, link.label,
        );
    }
    html.push_str("</div>\n</div>");
    html
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{DEFAULT_TEMPLATE, PageData, assemble, downloads_fragment};
    use crate::builder::DownloadLink;

    #[test]
    fn assemble_substitutes_all_placeholders() {
        let template = "<title>{{title}}</title>{{downloads}}{{content}}";
        let page = PageData {
            title: "Tool".to_owned(),
            content: "<p>body</p>".to_owned(),
            downloads: "<div>dl</div>".to_owned(),
        };
        assert_eq!(
            assemble(template, &page),
            "<title>Tool</title><div>dl</div><p>body</p>"
        );
    }

    #[test]
    fn assemble_is_literal_not_escaping() {
        let page = PageData {
            title: "a < b & c".to_owned(),
            ..Default::default()
        };
        assert_eq!(assemble("{{title}}", &page), "a < b & c");
    }

    #[test]
    fn default_template_has_all_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains("{{title}}"));
        assert!(DEFAULT_TEMPLATE.contains("{{content}}"));
        assert!(DEFAULT_TEMPLATE.contains("{{downloads}}"));
    }

    #[test]
    fn downloads_fragment_empty_without_entries() {
        assert_eq!(downloads_fragment(&[], "dist"), "");
    }

    #[test]
    fn downloads_fragment_links_into_bundle_directory() {
        let links = vec![
            DownloadLink {
                label: "Linux (AMD64)".to_owned(),
                file: "tool-linux-amd64".to_owned(),
            },
            DownloadLink {
                label: "Windows (AMD64)".to_owned(),
                file: "tool-windows-amd64.exe".to_owned(),
            },
        ];
        let html = downloads_fragment(&links, "dist");
        assert!(html.contains("<a href=\"dist/tool-linux-amd64\" class=\"download-link\" download>Linux (AMD64)</a>"));
        assert!(html.contains("dist/tool-windows-amd64.exe"));
        assert!(html.starts_with("<div class=\"download-section\">"));
    }
}
