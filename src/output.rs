//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every document is
//! its public identity — positional index, slug, title — with storage paths
//! shown as secondary context via indented `Source:` lines. Reading the
//! output of `docsmith index` should feel like reading a content inventory,
//! not a directory listing.
//!
//! ```text
//! Documents
//! 001 intro
//!     Source: 01.intro.mdx
//! 002 setup
//!     Source: 02.setup.mdx
//!
//! Indexed 2 documents
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::document::DocumentRecord;
use crate::nav::DocSummary;
use crate::resolver::SlugMap;
use crate::sitemap::SitemapEntry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index_number(pos: usize) -> String {
    format!("{pos:0>3}")
}

/// Format the resolved slug map as a content inventory.
pub fn format_index(map: &SlugMap, extension: &str) -> Vec<String> {
    let mut lines = vec!["Documents".to_string()];
    for (pos, (slug, storage)) in map.iter().enumerate() {
        lines.push(format!("{} {}", format_index_number(pos + 1), slug));
        lines.push(format!("    Source: {storage}.{extension}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Indexed {} document{}",
        map.len(),
        plural(map.len())
    ));
    lines
}

/// Format the flattened reading order with prev/next arrows implied by
/// position.
pub fn format_reading_order(order: &[DocSummary]) -> Vec<String> {
    let mut lines = vec!["Reading order".to_string()];
    for (pos, doc) in order.iter().enumerate() {
        lines.push(format!(
            "{} {}",
            format_index_number(pos + 1),
            doc.title
        ));
        lines.push(format!("    Slug: {}", doc.slug));
    }
    lines
}

/// Format a loaded document: identity first, then metadata, then body size.
pub fn format_document(doc: &DocumentRecord, description: &str) -> Vec<String> {
    let mut lines = vec![
        doc.title.clone(),
        format!("    Slug: {}", doc.slug),
        format!("    Description: {description}"),
    ];
    let extra_keys: Vec<&str> = doc
        .metadata
        .keys()
        .map(String::as_str)
        .filter(|k| *k != "title" && *k != "description")
        .collect();
    if !extra_keys.is_empty() {
        lines.push(format!("    Metadata: {}", extra_keys.join(", ")));
    }
    lines.push(format!(
        "    Body: {} line{}",
        doc.body.lines().count(),
        plural(doc.body.lines().count())
    ));
    lines
}

/// Format sitemap entries and a trailing count.
pub fn format_sitemap(entries: &[SitemapEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    for (pos, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index_number(pos + 1), entry.loc));
    }
    lines.push(String::new());
    lines.push(format!(
        "Sitemap has {} entr{}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    ));
    lines
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

pub fn print_index(map: &SlugMap, extension: &str) {
    for line in format_index(map, extension) {
        println!("{line}");
    }
}

pub fn print_reading_order(order: &[DocSummary]) {
    for line in format_reading_order(order) {
        println!("{line}");
    }
}

pub fn print_document(doc: &DocumentRecord, description: &str) {
    for line in format_document(doc, description) {
        println!("{line}");
    }
}

pub fn print_sitemap(entries: &[SitemapEntry]) {
    for line in format_sitemap(entries) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Metadata;

    fn sample_map() -> SlugMap {
        let mut map = SlugMap::new();
        map.insert("intro".to_string(), "01.intro".to_string());
        map.insert(
            "components/button".to_string(),
            "components/01.button".to_string(),
        );
        map
    }

    #[test]
    fn index_lists_slug_then_source() {
        let lines = format_index(&sample_map(), "mdx");
        assert_eq!(lines[0], "Documents");
        assert_eq!(lines[1], "001 components/button");
        assert_eq!(lines[2], "    Source: components/01.button.mdx");
        assert_eq!(lines[3], "002 intro");
        assert_eq!(lines[4], "    Source: 01.intro.mdx");
    }

    #[test]
    fn index_summary_counts_documents() {
        let lines = format_index(&sample_map(), "mdx");
        assert_eq!(lines.last().unwrap(), "Indexed 2 documents");
    }

    #[test]
    fn reading_order_shows_title_then_slug() {
        let order = vec![
            DocSummary {
                slug: "intro".to_string(),
                title: "Introduction".to_string(),
            },
            DocSummary {
                slug: "setup".to_string(),
                title: "Setup".to_string(),
            },
        ];
        let lines = format_reading_order(&order);
        assert_eq!(lines[1], "001 Introduction");
        assert_eq!(lines[2], "    Slug: intro");
        assert_eq!(lines[3], "002 Setup");
    }

    #[test]
    fn document_detail_lists_extra_metadata_keys() {
        let mut metadata = Metadata::new();
        metadata.insert("title".to_string(), serde_yaml::Value::from("Button"));
        metadata.insert("badge".to_string(), serde_yaml::Value::from("new"));
        let doc = DocumentRecord {
            slug: "components/button".to_string(),
            title: "Button".to_string(),
            metadata,
            body: "line one\nline two".to_string(),
        };

        let lines = format_document(&doc, "A clickable thing");
        assert_eq!(lines[0], "Button");
        assert!(lines.contains(&"    Metadata: badge".to_string()));
        assert!(lines.contains(&"    Body: 2 lines".to_string()));
    }

    #[test]
    fn sitemap_lines_are_numbered_locs() {
        let entries = vec![SitemapEntry {
            loc: "https://x.test/docs/intro".to_string(),
            lastmod: "2026-03-14T09:26:53Z".to_string(),
        }];
        let lines = format_sitemap(&entries);
        assert_eq!(lines[0], "001 https://x.test/docs/intro");
        assert_eq!(lines.last().unwrap(), "Sitemap has 1 entry");
    }
}
