//! Navigation sequencing: one total reading order for the whole docs tree.
//!
//! Flattens the content tree depth-first into a single ordered list of
//! document summaries. Siblings at every level — files and folders mixed —
//! are ordered by the numeric order token of the *raw* name (ascending,
//! untokenized entries after all tokenized ones), tie-broken by public name.
//! The flattened list drives previous/next links and the sidebar; every
//! consumer sees the same single ordering.
//!
//! ```text
//! 01.intro.mdx            ┐
//! 02.setup.mdx            ├─ intro, setup, components/button
//! components/01.button.mdx┘
//! ```
//!
//! The sequence is rebuilt from the store on each request. The store is
//! read-only at request time, so this is always consistent, and it keeps the
//! sequencer free of cache-invalidation concerns.

use crate::document::{split_frontmatter, title_for};
use crate::naming::{ParsedName, parse_entry_name};
use crate::resolver::{ResolveError, join_segments};
use crate::store::ContentStore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Slug + display title, the summary form of a document used by navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocSummary {
    pub slug: String,
    pub title: String,
}

/// Flatten the content tree into reading order.
///
/// Colliding raw names are rejected here just as in [`crate::resolver`]:
/// a duplicate slug would make the sequence not a total order (a document
/// could become its own neighbor), so the walk fails with
/// [`ResolveError::AmbiguousSlug`] instead.
pub fn sequence(store: &ContentStore) -> Result<Vec<DocSummary>, ResolveError> {
    let mut order = Vec::new();
    let mut seen = BTreeMap::new();
    sequence_dir(store, "", "", &mut order, &mut seen)?;
    Ok(order)
}

/// Look up the documents before and after `slug` in the reading order.
///
/// Returns `None` on either side at the sequence boundaries. A slug absent
/// from the sequence yields `(None, None)` — absence is a caller bug, but
/// the contract never turns it into a failure.
pub fn neighbors<'a>(
    order: &'a [DocSummary],
    slug: &str,
) -> (Option<&'a DocSummary>, Option<&'a DocSummary>) {
    let Some(index) = order.iter().position(|doc| doc.slug == slug) else {
        return (None, None);
    };
    let previous = index.checked_sub(1).and_then(|i| order.get(i));
    let next = order.get(index + 1);
    (previous, next)
}

enum Entry {
    File { storage: String },
    Folder { raw_dir: String },
}

fn sequence_dir(
    store: &ContentStore,
    raw_dir: &str,
    base_slug: &str,
    order: &mut Vec<DocSummary>,
    seen: &mut BTreeMap<String, String>,
) -> Result<(), ResolveError> {
    let mut siblings: Vec<(ParsedName, Entry)> = Vec::new();

    for entry in store.entries(Path::new(raw_dir))? {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if entry.is_dir() {
            siblings.push((
                parse_entry_name(&name),
                Entry::Folder {
                    raw_dir: join_segments(raw_dir, &name),
                },
            ));
        } else if store.is_content_file(&entry) {
            let stem = entry
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            siblings.push((
                parse_entry_name(&stem),
                Entry::File {
                    storage: join_segments(raw_dir, &stem),
                },
            ));
        }
    }

    siblings.sort_by(|(a, _), (b, _)| a.sort_key().cmp(&b.sort_key()));

    for (parsed, entry) in siblings {
        let slug = join_segments(base_slug, &parsed.name);
        match entry {
            Entry::File { storage } => {
                if let Some(first) = seen.get(&slug) {
                    return Err(ResolveError::AmbiguousSlug {
                        slug,
                        first: first.clone(),
                        second: storage,
                    });
                }
                let content = store.read(&storage)?;
                let (metadata, _body) = split_frontmatter(&content, &storage);
                seen.insert(slug.clone(), storage);
                order.push(DocSummary {
                    title: title_for(&slug, &metadata),
                    slug,
                });
            }
            Entry::Folder { raw_dir } => {
                sequence_dir(store, &raw_dir, &slug, order, seen)?;
            }
        }
    }

    Ok(())
}
