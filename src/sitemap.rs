//! Sitemap emission: one URL per resolvable slug.
//!
//! Enumerates the slug map, joins every slug under the configured base URL
//! and route prefix, and attaches a single build-time timestamp. The
//! timestamp is injected by the caller rather than read per file — one
//! deterministic value per build, so repeated builds of unchanged content
//! produce identical output.
//!
//! No ordering guarantee is part of the contract; entries come out in the
//! slug map's key order because that is what iteration gives us.

use crate::config::SiteConfig;
use crate::resolver::SlugMap;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A single sitemap entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
}

/// Build one entry per resolvable slug.
pub fn emit_all(map: &SlugMap, config: &SiteConfig, lastmod: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = config.base_url.trim_end_matches('/');
    let prefix = if config.route_prefix.is_empty() {
        String::new()
    } else {
        format!("/{}", config.route_prefix)
    };
    let lastmod = lastmod.to_rfc3339_opts(SecondsFormat::Secs, true);

    map.keys()
        .map(|slug| SitemapEntry {
            loc: format!("{base}{prefix}/{slug}"),
            lastmod: lastmod.clone(),
        })
        .collect()
}

/// Render entries as a standard `<urlset>` sitemap document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escape the five XML special characters.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
