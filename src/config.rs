//! Site configuration: theme, deployment base path and origin.

use std::fmt;
use std::path::Path;

use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::theme::Theme;
use crate::{Error, Result};

/// Origin used for smoke checks when none is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost:4173";

/// Configuration for rendering and building the site
///
/// Every field has a default so a config file only needs to name what it
/// changes:
///
/// ```
/// let cfg = carepage::SiteConfig::from_json_str(r#"{"base_path": "care-agency-webpage"}"#).unwrap();
/// assert_eq!(cfg.base_path.as_str(), "/care-agency-webpage/");
/// assert_eq!(cfg.theme, carepage::Theme::default());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: Theme,
    /// Subpath the site is deployed under
    pub base_path: BasePath,
    /// Scheme and host the site is served from
    pub origin: String,
    /// Copyright year in the footer; the current year when unset
    pub year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            base_path: BasePath::root(),
            origin: DEFAULT_ORIGIN.to_string(),
            year: None,
        }
    }
}

impl SiteConfig {
    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading site config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// URL of the rendered document: origin joined with the base path.
    pub fn document_url(&self) -> Result<Url> {
        let origin = Url::parse(&self.origin)?;
        if origin.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "origin '{}' cannot be used as a base URL",
                self.origin
            )));
        }
        Ok(origin.join(self.base_path.as_str())?)
    }

    pub fn copyright_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Normalised deployment subpath, always starting and ending with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    pub fn root() -> Self {
        BasePath("/".to_string())
    }

    /// Normalise a base path. `care-agency-webpage`, `/care-agency-webpage`
    /// and `/care-agency-webpage/` all become `/care-agency-webpage/`.
    pub fn new(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Self::root();
        }
        BasePath(format!("/{}/", segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL for a static asset given relative to the site root.
    pub fn asset_url(&self, relative: &str) -> String {
        format!("{}{}", self.0, relative.trim_start_matches('/'))
    }

    /// Map a request path back to a site-relative path, or `None` when the
    /// request falls outside the base path.
    pub fn strip<'a>(&self, request_path: &'a str) -> Option<&'a str> {
        if let Some(rest) = request_path.strip_prefix(self.0.as_str()) {
            return Some(rest);
        }
        // `/base` without the trailing slash still addresses the index
        if request_path == self.0.trim_end_matches('/') {
            return Some("");
        }
        None
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BasePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BasePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BasePath::new(&raw))
    }
}
