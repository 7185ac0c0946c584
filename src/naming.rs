//! Centralized filename parsing for the NN.name convention.
//!
//! Every entry in the docs tree (folders and content files) follows the same
//! naming pattern: an optional numeric prefix (`NN.`) followed by a name. The
//! prefix exists only to control sort order; it is stripped from every
//! public-facing identifier. This module provides a single parsing function
//! so folders, files, and slug segments are handled identically.
//!
//! ## Display Titles
//!
//! Dashes in a public name are converted to spaces and each word is
//! capitalized for display:
//! - `01.getting-started.mdx` → slug segment "getting-started", title "Getting Started"
//! - `components/02.input-box.mdx` → slug segment "input-box", title "Input Box"

/// Result of parsing an ordered entry name like `02.input-box`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Order token if present (e.g. `2` from `02.input-box`). `None` sorts
    /// after every tokenized sibling.
    pub order: Option<u32>,
    /// Public name with the token stripped. For untokenized entries this is
    /// the full input.
    pub name: String,
}

impl ParsedName {
    /// Sort key for sibling ordering: token ascending, untokenized entries
    /// last, public name as tie-break.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.order.unwrap_or(u32::MAX), &self.name)
    }
}

/// Parse an entry name following the `NN.name` convention.
///
/// Exactly one token is stripped; a name like `01.02.intro` parses to
/// order=1, name="02.intro". Handles these patterns:
/// - `"01.intro"` → order=Some(1), name="intro"
/// - `"10.getting-started"` → order=Some(10), name="getting-started"
/// - `"intro"` → order=None, name="intro"
/// - `"01."` → order=Some(1), name=""
/// - `"1stsection"` → order=None, name="1stsection" (digits but no dot)
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some(dot_pos) = name.find('.') {
        let prefix = &name[..dot_pos];
        if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
            // Any digit run before the dot is a token. Runs too long for
            // u32 still strip; they just sort with the untokenized tail.
            let num = prefix.parse::<u32>().unwrap_or(u32::MAX);
            return ParsedName {
                order: Some(num),
                name: name[dot_pos + 1..].to_string(),
            };
        }
    }
    ParsedName {
        order: None,
        name: name.to_string(),
    }
}

/// Strip the order token from a name, keeping only the public part.
pub fn strip_order_token(name: &str) -> String {
    parse_entry_name(name).name
}

/// Title-case a slug segment for display: dashes become spaces and the
/// first letter of each word is capitalized.
///
/// - `"getting-started"` → "Getting Started"
/// - `"button"` → "Button"
pub fn title_from_segment(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
