//! Shared test utilities for the docsmith test suite.
//!
//! Builds the canonical docs tree used across module tests:
//!
//! ```text
//! <tmp>/
//! ├── 01.intro.mdx              # frontmatter title "Introduction"
//! ├── 02.setup.mdx              # no frontmatter
//! └── components/
//!     └── 01.button.mdx         # frontmatter title "Button"
//! ```
//!
//! Resolved slugs: `intro`, `setup`, `components/button`; reading order is
//! exactly that sequence (tokenized files first, the untokenized
//! `components/` folder last).

use std::fs;
use tempfile::TempDir;

/// Create the canonical docs tree in a fresh temp directory.
///
/// Tests get an isolated copy they can mutate without affecting each other.
pub fn docs_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("01.intro.mdx"),
        "---\ntitle: Introduction\ndescription: Start here\n---\n\nWelcome to the docs.\n",
    )
    .unwrap();

    fs::write(
        tmp.path().join("02.setup.mdx"),
        "# Setup\n\nInstall the library.\n",
    )
    .unwrap();

    let components = tmp.path().join("components");
    fs::create_dir_all(&components).unwrap();
    fs::write(
        components.join("01.button.mdx"),
        "---\ntitle: Button\n---\n\nA clickable button.\n",
    )
    .unwrap();

    tmp
}
