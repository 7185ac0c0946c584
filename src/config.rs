//! Site configuration module.
//!
//! Loads and validates `config.toml` from the content root. Configuration is
//! deliberately flat and small — base URL, route prefix, content extension,
//! and the description fallback — and every field has a default, so a docs
//! tree with no config file at all still builds.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://docs.example.com"   # Absolute site origin for sitemap URLs
//! route_prefix = "docs"                   # Path segment between origin and slug
//! extension = "mdx"                       # Content file extension
//! default_description = "Documentation."  # Used when frontmatter has no description
//! ```
//!
//! Unknown keys are rejected to catch typos early. The loaded value is
//! passed explicitly into whichever component needs it — there is no global
//! config state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute origin the sitemap joins slugs under.
    pub base_url: String,
    /// Path segment between the origin and every slug (`docs` → `/docs/intro`).
    /// May be empty for docs served at the site root.
    pub route_prefix: String,
    /// Content file extension, without the dot.
    pub extension: String,
    /// Page description used when frontmatter carries none.
    pub default_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://docs.example.com".to_string(),
            route_prefix: "docs".to_string(),
            extension: "mdx".to_string(),
            default_description: "Documentation.".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base_url must be absolute (http:// or https://), got '{}'",
                self.base_url
            )));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::Validation(
                "extension must not be empty".to_string(),
            ));
        }
        if self.route_prefix.starts_with('/') || self.route_prefix.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "route_prefix must be a bare segment without slashes, got '{}'",
                self.route_prefix
            )));
        }
        Ok(())
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock config.toml, printed by `docsmith gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# docsmith site configuration
# All options are optional - defaults shown below.

# Absolute site origin. Sitemap URLs are built as
# <base_url>/<route_prefix>/<slug>.
base_url = "https://docs.example.com"

# Path segment between the origin and every document slug.
# Set to "" to serve docs at the site root.
route_prefix = "docs"

# Extension of content files in the docs tree (without the dot).
extension = "mdx"

# Description used for pages whose frontmatter has no `description` key.
default_description = "Documentation."
"#
}
