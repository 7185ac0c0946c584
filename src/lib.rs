//! # docsmith
//!
//! The indexing and navigation-ordering core of a documentation website.
//! Your filesystem is the table of contents: a directory of MDX files whose
//! names carry numeric ordering prefixes (`01.intro.mdx`) becomes a set of
//! stable public slugs, a deterministic reading order, and a sitemap.
//!
//! # Architecture
//!
//! Components consume each other bottom-up; each is a stateless, read-only
//! traversal over the content tree:
//!
//! ```text
//! store      docs/            → directory entries, file contents
//! resolver   store            → slug ↔ storage-path map
//! document   map + slug       → metadata + body
//! nav        store            → flattened reading order, prev/next
//! sitemap    map + config     → {loc, lastmod} entries, urlset XML
//! ```
//!
//! There is no shared mutable state and no cache: every request re-walks the
//! store, which is treated as immutable for the duration of a build.
//! Concurrent requests are therefore safe by construction.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Rooted filesystem access and content-file detection |
//! | [`naming`] | `NN.name` order-token parsing and display titling |
//! | [`resolver`] | Public slug → storage path mapping with collision detection |
//! | [`document`] | Document loading and YAML frontmatter splitting |
//! | [`nav`] | Depth-first reading order and neighbor lookup |
//! | [`sitemap`] | Sitemap entries and XML rendering |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Strict slug collisions
//!
//! Two raw names that strip to the same public slug (`01.intro.mdx` and
//! `02.intro.mdx`) are a content-authoring defect. Resolution fails with
//! [`resolver::ResolveError::AmbiguousSlug`] naming both files instead of
//! letting one silently shadow the other — silent shadowing loses a document
//! from the index with no trace.
//!
//! ## Errors are values, not pages
//!
//! Every fallible operation returns a typed `Result`; the route boundary (or
//! the CLI here) decides what "not found" looks like. A failed lookup for
//! one slug never affects any other slug: loads are pure reads with no
//! shared state to poison.
//!
//! ## Permissive metadata
//!
//! Frontmatter is split with the conventional `---` fences and parsed as a
//! YAML mapping. Unknown keys pass through untouched; a malformed header is
//! logged and treated as empty rather than failing the page, so one bad
//! document cannot take down the index.

pub mod config;
pub mod document;
pub mod nav;
pub mod naming;
pub mod output;
pub mod resolver;
pub mod sitemap;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
