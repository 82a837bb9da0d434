//! Writes the static site to disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SiteConfig;
use crate::page::Page;
use crate::render::{SCRIPT_PATH, STYLESHEET_PATH};
use crate::style::stylesheet;
use crate::Result;

/// Name of the manifest written next to `index.html`
pub const MANIFEST_FILE: &str = "manifest.json";

/// Suppresses default form submission in the browser.
pub const SITE_SCRIPT: &str = "document.addEventListener('submit', function (event) {\n  event.preventDefault();\n});\n";

/// Hex SHA-256 of a byte slice.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// A file written by the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub sha256: String,
    pub bytes: u64,
}

/// Every file of a build, keyed by path relative to the output directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub base_path: String,
    pub files: BTreeMap<String, ManifestEntry>,
    pub smoke_passed: bool,
}

impl BuildManifest {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(dir.as_ref().join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Builds the site into an output directory.
pub struct SiteBuilder {
    config: SiteConfig,
    out_dir: PathBuf,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Render, verify and write every file, then the manifest.
    pub fn build(&self) -> Result<BuildManifest> {
        let mut page = Page::new(self.config.clone());
        let html = page.mount().html().to_string();
        let smoke_passed = page.smoke_report().map(|r| r.passed()).unwrap_or(false);
        if !smoke_passed {
            warn!("building despite smoke test failures");
        }

        let mut manifest = BuildManifest {
            base_path: self.config.base_path.to_string(),
            files: BTreeMap::new(),
            smoke_passed,
        };

        self.write(&mut manifest, "index.html", html.as_bytes())?;
        self.write(
            &mut manifest,
            STYLESHEET_PATH,
            stylesheet(&self.config.theme.colours).as_bytes(),
        )?;
        self.write(&mut manifest, SCRIPT_PATH, SITE_SCRIPT.as_bytes())?;

        let manifest_path = self.out_dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
        info!(
            "built {} file(s) into {}",
            manifest.files.len(),
            self.out_dir.display()
        );
        Ok(manifest)
    }

    fn write(&self, manifest: &mut BuildManifest, relative: &str, bytes: &[u8]) -> Result<()> {
        let path = self.out_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        info!("wrote {}", path.display());
        manifest.files.insert(
            relative.to_string(),
            ManifestEntry {
                sha256: digest(bytes),
                bytes: bytes.len() as u64,
            },
        );
        Ok(())
    }
}
