//! S‑Rock Care site generator
//!
//! Renders the single-page homecare site from a fixed theme and fixed copy,
//! writes it as static files, and checks the result with a one-shot smoke
//! test.
//!
//! # Features
//!
//! - **CSP-friendly output**: images are inline SVG placeholders or same-origin
//!   assets, styles and scripts are same-origin files
//! - **Subpath deployment**: every asset URL honours the configured base path
//! - **Smoke test**: structural checks run once after the first render and
//!   only ever log
//!
//! # Example
//!
//! ```
//! use carepage::{Page, SiteConfig};
//!
//! let config = SiteConfig {
//!     year: Some(2025),
//!     ..Default::default()
//! };
//! let mut page = Page::new(config);
//! let html = page.mount().html().to_string();
//! assert!(html.contains("id=\"services\""));
//! assert!(page.smoke_report().unwrap().passed());
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod content;
pub mod page;
pub mod placeholder;
pub mod render;
pub mod serve;
pub mod site;
pub mod smoke;
pub mod style;
pub mod theme;

pub use config::{BasePath, SiteConfig};
pub use page::{FormHandler, Page, SubmitOutcome, SuppressSubmission};
pub use placeholder::{placeholder_data_uri, Placeholder};
pub use render::{render_page, Document};
pub use site::{BuildManifest, SiteBuilder};
pub use smoke::{verify, SmokeReport};
pub use theme::{LogoSource, Palette, Theme};
