//! Slug resolution: mapping public identifiers to storage paths.
//!
//! Walks the content tree recursively and builds a bidirectional view of it:
//! for every content file, the public slug (order tokens stripped from every
//! segment) maps to the storage path (tokens intact, extension removed). The
//! slug is what appears in URLs; the storage path is what [`crate::store`]
//! reads back.
//!
//! ```text
//! 01.intro.mdx                  → intro              => 01.intro
//! 02.setup.mdx                  → setup              => 02.setup
//! 03.components/01.button.mdx   → components/button  => 03.components/01.button
//! ```
//!
//! ## Collisions
//!
//! Two sibling raw names can strip to the same public name (`01.intro.mdx`
//! and `02.intro.mdx`). That is a content-authoring defect: silently letting
//! one shadow the other loses a document from the index, so resolution fails
//! with [`ResolveError::AmbiguousSlug`] naming both storage paths.
//!
//! Output ordering is not this module's concern — the map is keyed for
//! lookup, and reading order comes from [`crate::nav`].

use crate::naming::strip_order_token;
use crate::store::{ContentStore, StoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Public slug → storage path, for every content file under the root.
pub type SlugMap = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    #[error("Ambiguous slug '{slug}': both '{first}' and '{second}' resolve to it")]
    AmbiguousSlug {
        slug: String,
        first: String,
        second: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for ResolveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(path) => ResolveError::NotFound(path),
            StoreError::Io(err) => ResolveError::Io(err),
        }
    }
}

/// Walk the full content tree and build the slug map.
///
/// Fails with [`ResolveError::NotFound`] when the content root does not
/// exist and with [`ResolveError::AmbiguousSlug`] on the first collision.
pub fn resolve(store: &ContentStore) -> Result<SlugMap, ResolveError> {
    let mut map = SlugMap::new();
    resolve_dir(store, "", "", &mut map)?;
    Ok(map)
}

fn resolve_dir(
    store: &ContentStore,
    raw_dir: &str,
    base_slug: &str,
    map: &mut SlugMap,
) -> Result<(), ResolveError> {
    for entry in store.entries(Path::new(raw_dir))? {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if entry.is_dir() {
            let public = strip_order_token(&name);
            resolve_dir(
                store,
                &join_segments(raw_dir, &name),
                &join_segments(base_slug, &public),
                map,
            )?;
        } else if store.is_content_file(&entry) {
            let stem = entry
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let slug = join_segments(base_slug, &strip_order_token(&stem));
            let storage = join_segments(raw_dir, &stem);

            if let Some(first) = map.get(&slug) {
                return Err(ResolveError::AmbiguousSlug {
                    slug,
                    first: first.clone(),
                    second: storage,
                });
            }
            map.insert(slug, storage);
        }
        // Anything else (stray files with other extensions) is ignored.
    }
    Ok(())
}

/// Join slug/storage path segments with `/`, treating an empty base as root.
pub fn join_segments(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{base}/{segment}")
    }
}
