//! Document loading: slug → metadata + body.
//!
//! Resolves a public slug through the slug map, reads the backing file, and
//! splits the optional YAML frontmatter header from the body. Built per
//! request; nothing here caches (the store is read-only at request time, so
//! re-reading is always correct).
//!
//! ## Metadata policy
//!
//! Parsing is deliberately permissive. `title` and `description` are the
//! recognized keys; everything else passes through verbatim in the metadata
//! map so downstream consumers (SEO tags, custom components) can pick out
//! what they want. A missing header yields empty metadata and the full text
//! as body. A header that is present but unparsable yields empty metadata
//! and a warning — one bad document must not take down the page or the
//! index, so malformed frontmatter is never an error the caller sees.

use crate::naming::title_from_segment;
use crate::resolver::SlugMap;
use crate::store::{ContentStore, StoreError};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No document for slug '{0}'")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Frontmatter key-value pairs, keys stringified, values kept as raw YAML.
pub type Metadata = BTreeMap<String, serde_yaml::Value>;

/// A fully loaded document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// Public slug this record was loaded for.
    pub slug: String,
    /// Frontmatter `title`, or the last slug segment title-cased.
    pub title: String,
    /// All frontmatter keys, recognized or not.
    pub metadata: Metadata,
    /// Raw body text with the header removed.
    pub body: String,
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    // The middle group and its trailing newline are optional so an empty
    // header block (`---` directly followed by `---`) still counts as a
    // header rather than leaking the fences into the body.
    FRONTMATTER_REGEX
        .get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n?---\s*\n?(.*)$").unwrap())
}

/// Load the document for `slug`.
///
/// Fails with [`LoadError::NotFound`] when the slug is absent from the map
/// or the backing file disappeared between resolve and read. Pure read —
/// a failure for one slug never affects lookups for any other.
pub fn load(
    store: &ContentStore,
    map: &SlugMap,
    slug: &str,
) -> Result<DocumentRecord, LoadError> {
    let storage_path = map
        .get(slug)
        .ok_or_else(|| LoadError::NotFound(slug.to_string()))?;

    let content = match store.read(storage_path) {
        Ok(content) => content,
        Err(StoreError::NotFound(_)) => return Err(LoadError::NotFound(slug.to_string())),
        Err(StoreError::Io(err)) => return Err(LoadError::Io(err)),
    };

    let (metadata, body) = split_frontmatter(&content, storage_path);
    let title = title_for(slug, &metadata);

    Ok(DocumentRecord {
        slug: slug.to_string(),
        title,
        metadata,
        body,
    })
}

/// Split a YAML frontmatter header from the body.
///
/// Returns empty metadata and the full text when no header is present, and
/// empty metadata plus the remaining body (with a logged warning) when the
/// header exists but fails to parse as a YAML mapping.
pub fn split_frontmatter(content: &str, origin: &str) -> (Metadata, String) {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return (Metadata::new(), content.to_string());
    };

    let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

    if yaml.trim().is_empty() {
        return (Metadata::new(), body.to_string());
    }

    match serde_yaml::from_str::<serde_yaml::Mapping>(yaml) {
        Ok(mapping) => {
            let metadata = mapping
                .into_iter()
                .filter_map(|(key, value)| {
                    key.as_str().map(|k| (k.to_string(), value))
                })
                .collect();
            (metadata, body.to_string())
        }
        Err(err) => {
            warn!(origin, error = %err, "malformed frontmatter, serving with empty metadata");
            (Metadata::new(), body.to_string())
        }
    }
}

/// Resolve a display title: frontmatter `title` wins, the last slug segment
/// title-cased is the fallback.
pub fn title_for(slug: &str, metadata: &Metadata) -> String {
    metadata
        .get("title")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let last = slug.rsplit('/').next().unwrap_or(slug);
            title_from_segment(last)
        })
}

/// Resolve a page description: frontmatter `description`, else the
/// configured fallback.
pub fn description_for<'a>(metadata: &'a Metadata, fallback: &'a str) -> &'a str {
    metadata
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver;
    use crate::test_helpers::docs_fixture;
    use std::fs;
    use tempfile::TempDir;

    fn load_fixture(slug: &str) -> Result<DocumentRecord, LoadError> {
        let tmp = docs_fixture();
        let store = ContentStore::new(tmp.path(), "mdx");
        let map = resolver::resolve(&store).unwrap();
        load(&store, &map, slug)
    }

    // =========================================================================
    // load() tests
    // =========================================================================

    #[test]
    fn load_returns_metadata_and_body() {
        let doc = load_fixture("intro").unwrap();
        assert_eq!(doc.slug, "intro");
        assert_eq!(doc.title, "Introduction");
        assert!(doc.body.contains("Welcome"));
    }

    #[test]
    fn load_unknown_slug_is_not_found() {
        match load_fixture("does-not-exist") {
            Err(LoadError::NotFound(slug)) => assert_eq!(slug, "does-not-exist"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn failed_load_does_not_poison_later_lookups() {
        let tmp = docs_fixture();
        let store = ContentStore::new(tmp.path(), "mdx");
        let map = resolver::resolve(&store).unwrap();

        assert!(load(&store, &map, "does-not-exist").is_err());
        assert!(load(&store, &map, "intro").is_ok());
    }

    #[test]
    fn every_resolved_slug_loads() {
        let tmp = docs_fixture();
        let store = ContentStore::new(tmp.path(), "mdx");
        let map = resolver::resolve(&store).unwrap();

        for slug in map.keys() {
            let doc = load(&store, &map, slug).unwrap();
            assert_eq!(&doc.slug, slug);
        }
    }

    #[test]
    fn title_falls_back_to_title_cased_segment() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("01.guides")).unwrap();
        fs::write(
            tmp.path().join("01.guides/01.getting-started.mdx"),
            "No frontmatter here.",
        )
        .unwrap();

        let store = ContentStore::new(tmp.path(), "mdx");
        let map = resolver::resolve(&store).unwrap();
        let doc = load(&store, &map, "guides/getting-started").unwrap();
        assert_eq!(doc.title, "Getting Started");
    }

    // =========================================================================
    // split_frontmatter() tests
    // =========================================================================

    #[test]
    fn splits_header_from_body() {
        let content = "---\ntitle: Button\ndescription: A clickable thing\n---\n\n# Button\n";
        let (meta, body) = split_frontmatter(content, "test");

        assert_eq!(meta["title"].as_str(), Some("Button"));
        assert_eq!(meta["description"].as_str(), Some("A clickable thing"));
        assert!(body.trim_start().starts_with("# Button"));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let content = "---\ntitle: X\nsidebar_badge: new\nweight: 3\n---\nbody";
        let (meta, _) = split_frontmatter(content, "test");

        assert_eq!(meta["sidebar_badge"].as_str(), Some("new"));
        assert_eq!(meta["weight"].as_u64(), Some(3));
    }

    #[test]
    fn no_header_yields_empty_metadata_and_full_body() {
        let content = "# Just Content\n\nNo header.";
        let (meta, body) = split_frontmatter(content, "test");

        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn empty_header_block_yields_empty_metadata() {
        let content = "---\n---\nbody text";
        let (meta, body) = split_frontmatter(content, "test");

        assert!(meta.is_empty());
        assert_eq!(body, "body text");
    }

    #[test]
    fn empty_header_with_blank_line_yields_empty_metadata() {
        let content = "---\n\n---\nbody text";
        let (meta, body) = split_frontmatter(content, "test");

        assert!(meta.is_empty());
        assert_eq!(body, "body text");
    }

    #[test]
    fn malformed_header_yields_empty_metadata() {
        let content = "---\ntitle: [unclosed\n---\nbody survives";
        let (meta, body) = split_frontmatter(content, "test");

        assert!(meta.is_empty());
        assert_eq!(body, "body survives");
    }

    #[test]
    fn non_mapping_header_yields_empty_metadata() {
        let content = "---\n- just\n- a list\n---\nbody";
        let (meta, _) = split_frontmatter(content, "test");
        assert!(meta.is_empty());
    }

    #[test]
    fn dashes_inside_body_are_not_a_header() {
        let content = "intro text\n---\nnot frontmatter\n---\n";
        let (meta, body) = split_frontmatter(content, "test");

        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    // =========================================================================
    // title/description resolution tests
    // =========================================================================

    #[test]
    fn metadata_title_wins() {
        let (meta, _) = split_frontmatter("---\ntitle: Custom\n---\nx", "test");
        assert_eq!(title_for("components/button", &meta), "Custom");
    }

    #[test]
    fn title_fallback_uses_last_segment_only() {
        assert_eq!(title_for("components/input-box", &Metadata::new()), "Input Box");
    }

    #[test]
    fn non_string_title_falls_back() {
        let (meta, _) = split_frontmatter("---\ntitle: 42\n---\nx", "test");
        assert_eq!(title_for("intro", &meta), "Intro");
    }

    #[test]
    fn description_fallback() {
        let meta = Metadata::new();
        assert_eq!(
            description_for(&meta, "A docs site."),
            "A docs site."
        );

        let (meta, _) = split_frontmatter("---\ndescription: Real one\n---\nx", "test");
        assert_eq!(description_for(&meta, "A docs site."), "Real one");
    }
}
