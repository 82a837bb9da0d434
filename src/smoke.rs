//! One-shot structural checks over a rendered page.
//!
//! The checks never fail the caller. Each failed assertion is logged at
//! `error` level and recorded in the returned [`SmokeReport`].

use std::fmt;
use std::sync::LazyLock;

use log::{error, info, warn};
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::config::SiteConfig;
use crate::content::SECTION_IDS;
use crate::render::Document;

static HEX_COLOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex colour pattern"));

static COLOUR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:rgba?|hsla?|hwb|lab|lch|oklab|oklch|color)\(\s*[^()\s][^()]*\)$")
        .expect("colour function pattern")
});

/// `#RRGGBB`, nothing else.
pub fn is_hex_colour(value: &str) -> bool {
    HEX_COLOUR.is_match(value)
}

/// A CSS colour function such as `rgb(249 243 249)` or `hsl(300 40% 97%)`.
pub fn is_colour_function(value: &str) -> bool {
    COLOUR_FUNCTION.is_match(value.trim())
}

/// Which assertion a [`CheckOutcome`] belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    BrandName,
    Colour(&'static str),
    Section(&'static str),
    ImageOrigin,
    NavAnchor(String),
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::BrandName => write!(f, "brand name"),
            Check::Colour(name) => write!(f, "colour '{}'", name),
            Check::Section(id) => write!(f, "section #{}", id),
            Check::ImageOrigin => write!(f, "image origin"),
            Check::NavAnchor(id) => write!(f, "nav anchor #{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: Check,
    pub passed: bool,
    pub detail: String,
}

/// Results of one verification pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SmokeReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    fn record(&mut self, check: Check, passed: bool, detail: impl Into<String>) {
        let detail = detail.into();
        if !passed {
            error!("smoke assertion failed: {}: {}", check, detail);
        }
        self.outcomes.push(CheckOutcome {
            check,
            passed,
            detail,
        });
    }
}

/// Verify a rendered document against the site configuration.
pub fn verify(config: &SiteConfig, document: &Document) -> SmokeReport {
    let mut report = SmokeReport::default();
    let dom = document.parse();

    check_brand(config, &mut report);
    check_colours(config, &mut report);
    check_sections(&dom, &mut report);
    check_nav_anchors(&dom, &mut report);

    match config.document_url() {
        Ok(doc_url) => check_images(&dom, &doc_url, &mut report),
        Err(e) => report.record(
            Check::ImageOrigin,
            false,
            format!("cannot resolve document URL: {}", e),
        ),
    }

    let failed = report.failures().count();
    if failed == 0 {
        info!("smoke test passed ({} checks)", report.outcomes.len());
    } else {
        warn!(
            "smoke test: {} of {} checks failed",
            failed,
            report.outcomes.len()
        );
    }
    report
}

fn check_brand(config: &SiteConfig, report: &mut SmokeReport) {
    let name = config.theme.brand.name.trim();
    report.record(
        Check::BrandName,
        !name.is_empty(),
        if name.is_empty() {
            "brand name is empty".to_string()
        } else {
            format!("'{}'", name)
        },
    );
}

fn check_colours(config: &SiteConfig, report: &mut SmokeReport) {
    let colours = &config.theme.colours;
    for (name, value) in [("primary", &colours.primary), ("accent", &colours.accent)] {
        let ok = is_hex_colour(value);
        report.record(Check::Colour(name), ok, describe_colour(value, ok, "#RRGGBB"));
    }
    let light = &colours.light;
    let ok = is_hex_colour(light) || is_colour_function(light);
    report.record(
        Check::Colour("light"),
        ok,
        describe_colour(light, ok, "#RRGGBB or a CSS colour function"),
    );
}

fn describe_colour(value: &str, ok: bool, expected: &str) -> String {
    if ok {
        format!("'{}'", value)
    } else {
        format!("'{}' is not {}", value, expected)
    }
}

fn elements_with_id(dom: &Html, id: &str) -> usize {
    match Selector::parse("[id]") {
        Ok(sel) => dom
            .select(&sel)
            .filter(|el| el.value().id() == Some(id))
            .count(),
        Err(_) => 0,
    }
}

fn check_sections(dom: &Html, report: &mut SmokeReport) {
    for id in SECTION_IDS {
        let n = elements_with_id(dom, id);
        report.record(
            Check::Section(id),
            n == 1,
            format!("found {} element(s) with id '{}'", n, id),
        );
    }
}

fn check_nav_anchors(dom: &Html, report: &mut SmokeReport) {
    let sel = match Selector::parse(r##"nav a[href^="#"]"##) {
        Ok(sel) => sel,
        Err(e) => {
            warn!("nav anchor selector rejected: {:?}", e);
            return;
        }
    };
    let hrefs: Vec<&str> = dom
        .select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .collect();
    for href in hrefs {
        let target = href.strip_prefix('#').unwrap_or(href);
        let n = if target.is_empty() {
            0
        } else {
            elements_with_id(dom, target)
        };
        report.record(
            Check::NavAnchor(target.to_string()),
            n > 0,
            if n > 0 {
                format!("'{}' resolves", href)
            } else {
                format!("'{}' has no target", href)
            },
        );
    }
}

/// Whether an image source is inline or from the document's own origin.
pub fn is_same_origin_or_inline(src: &str, document_url: &Url) -> bool {
    resolves_inline_or_same_origin(src, document_url, document_url)
}

fn resolves_inline_or_same_origin(src: &str, base: &Url, document_url: &Url) -> bool {
    match base.join(src.trim()) {
        Ok(resolved) => {
            resolved.scheme() == "data" || resolved.origin() == document_url.origin()
        }
        Err(_) => false,
    }
}

/// Base URL for relative references: the first `<base href>` joined onto the
/// document URL, or the document URL itself.
fn document_base(dom: &Html, document_url: &Url) -> Url {
    let href = Selector::parse("base[href]").ok().and_then(|sel| {
        dom.select(&sel)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string)
    });
    match href {
        Some(href) => match document_url.join(href.trim()) {
            Ok(base) => base,
            Err(e) => {
                warn!("ignoring unparsable <base href=\"{}\">: {}", href, e);
                document_url.clone()
            }
        },
        None => document_url.clone(),
    }
}

fn check_images(dom: &Html, document_url: &Url, report: &mut SmokeReport) {
    let sel = match Selector::parse("img") {
        Ok(sel) => sel,
        Err(e) => {
            report.record(Check::ImageOrigin, false, format!("selector error: {:?}", e));
            return;
        }
    };
    let base = document_base(dom, document_url);
    let mut total = 0usize;
    let mut offenders = Vec::new();
    for img in dom.select(&sel) {
        total += 1;
        let src = img.value().attr("src").unwrap_or_default();
        if !resolves_inline_or_same_origin(src, &base, document_url) {
            offenders.push(src.to_string());
        }
    }
    if offenders.is_empty() {
        report.record(
            Check::ImageOrigin,
            true,
            format!("{} image(s) inline or same-origin", total),
        );
    } else {
        for src in offenders {
            report.record(
                Check::ImageOrigin,
                false,
                format!("cross-origin image source '{}'", src),
            );
        }
    }
}
