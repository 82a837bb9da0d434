//! Page lifecycle: first render, the deferred smoke check, and form submission.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use scraper::Selector;

use crate::config::SiteConfig;
use crate::render::{render_page, Document};
use crate::smoke::{self, SmokeReport};
use crate::{Error, Result};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern"));

/// An outgoing request a form handler wants the page to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: String,
    pub url: String,
    pub body: Vec<(String, String)>,
}

/// A submit event delivered to a [`FormHandler`]
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub form_id: String,
    pub fields: Vec<(String, String)>,
    default_prevented: bool,
}

impl SubmitEvent {
    fn new(form_id: &str, fields: Vec<(String, String)>) -> Self {
        Self {
            form_id: form_id.to_string(),
            fields,
            default_prevented: false,
        }
    }

    /// Stop the browser's full-page form submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Receives form submissions.
///
/// Posting enquiries somewhere (a form-processing service, an API endpoint)
/// is the job of an implementation of this trait; the site ships only
/// [`SuppressSubmission`].
pub trait FormHandler {
    /// Handle a submit event and return the requests to issue.
    fn on_submit(&self, event: &mut SubmitEvent) -> Vec<OutboundRequest>;
}

/// Swallows submissions: prevents default and sends nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuppressSubmission;

impl FormHandler for SuppressSubmission {
    fn on_submit(&self, event: &mut SubmitEvent) -> Vec<OutboundRequest> {
        event.prevent_default();
        debug!("suppressed submission of form '{}'", event.form_id);
        Vec::new()
    }
}

/// What happened when a form was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Native constraint validation stopped the submit; names the failing fields
    Blocked { invalid: Vec<String> },
    /// The submit event reached the handler
    Dispatched {
        default_prevented: bool,
        requests: Vec<OutboundRequest>,
    },
}

impl SubmitOutcome {
    /// Whether the browser would leave the page.
    pub fn navigated(&self) -> bool {
        match self {
            SubmitOutcome::Blocked { .. } => false,
            SubmitOutcome::Dispatched {
                default_prevented, ..
            } => !default_prevented,
        }
    }

    pub fn requests(&self) -> &[OutboundRequest] {
        match self {
            SubmitOutcome::Blocked { .. } => &[],
            SubmitOutcome::Dispatched { requests, .. } => requests,
        }
    }
}

fn field_value<'a>(fields: &[(&str, &'a str)], name: &str) -> &'a str {
    fields
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| *v)
        .unwrap_or_default()
}

/// A mounted view of the site.
///
/// The first [`Page::mount`] renders the document and then runs the smoke
/// check once. Later mounts reuse the document and never re-run the check.
pub struct Page {
    config: SiteConfig,
    document: Option<Document>,
    smoke: Option<SmokeReport>,
    smoke_runs: usize,
    form_handler: Box<dyn FormHandler>,
}

impl Page {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            document: None,
            smoke: None,
            smoke_runs: 0,
            form_handler: Box::new(SuppressSubmission),
        }
    }

    /// Replace the handler that receives form submissions.
    pub fn with_form_handler(mut self, handler: impl FormHandler + 'static) -> Self {
        self.form_handler = Box::new(handler);
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn mount(&mut self) -> &Document {
        let config = &self.config;
        let document = self.document.get_or_insert_with(|| {
            let document = render_page(config);
            info!("rendered page ({} bytes)", document.html().len());
            document
        });

        if self.smoke.is_none() {
            self.smoke = Some(smoke::verify(config, document));
            self.smoke_runs += 1;
        }
        document
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Report from the post-mount check, once the page has been mounted.
    pub fn smoke_report(&self) -> Option<&SmokeReport> {
        self.smoke.as_ref()
    }

    pub fn smoke_runs(&self) -> usize {
        self.smoke_runs
    }

    /// Simulate submitting the form with the given id.
    ///
    /// Required fields and `type=email` inputs are checked the way a browser
    /// would before the submit event fires.
    pub fn submit(&mut self, form_id: &str, fields: &[(&str, &str)]) -> Result<SubmitOutcome> {
        let invalid = {
            let dom = self.mount().parse();
            let form_sel =
                Selector::parse("form").map_err(|e| Error::SelectorError(format!("{:?}", e)))?;
            let control_sel = Selector::parse("input[name], textarea[name], select[name]")
                .map_err(|e| Error::SelectorError(format!("{:?}", e)))?;

            let form = dom
                .select(&form_sel)
                .find(|f| f.value().id() == Some(form_id))
                .ok_or_else(|| Error::UnknownForm(form_id.to_string()))?;

            let mut invalid = Vec::new();
            for control in form.select(&control_sel) {
                let el = control.value();
                let Some(name) = el.attr("name") else { continue };
                let is_email = el.attr("type") == Some("email");
                // browsers strip whitespace from email inputs only
                let raw = field_value(fields, name);
                let value = if is_email { raw.trim() } else { raw };
                let required = el.attr("required").is_some();
                if required && value.is_empty() {
                    invalid.push(name.to_string());
                } else if is_email && !value.is_empty() && !EMAIL.is_match(value) {
                    invalid.push(name.to_string());
                }
            }
            invalid
        };

        if !invalid.is_empty() {
            debug!("form '{}' blocked by validation: {:?}", form_id, invalid);
            return Ok(SubmitOutcome::Blocked { invalid });
        }

        let owned = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut event = SubmitEvent::new(form_id, owned);
        let requests = self.form_handler.on_submit(&mut event);
        Ok(SubmitOutcome::Dispatched {
            default_prevented: event.default_prevented(),
            requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ENQUIRY_FORM_ID;

    fn page() -> Page {
        Page::new(SiteConfig {
            year: Some(2025),
            ..Default::default()
        })
    }

    const VALID: [(&str, &str); 4] = [
        ("name", "Ada Lovelace"),
        ("phone", "01793 000000"),
        ("email", "ada@example.com"),
        ("message", "Weekly visits please"),
    ];

    #[test]
    fn smoke_runs_once_after_first_mount() {
        let mut p = page();
        assert!(p.smoke_report().is_none());
        let first = p.mount().clone();
        assert_eq!(p.smoke_runs(), 1);
        let second = p.mount().clone();
        assert_eq!(first, second);
        assert_eq!(p.smoke_runs(), 1);
        assert!(p.smoke_report().unwrap().passed());
    }

    #[test]
    fn failing_smoke_does_not_stop_render() {
        let mut cfg = SiteConfig::default();
        cfg.theme.colours.accent = "orange".to_string();
        let mut p = Page::new(cfg);
        let html = p.mount().html().to_string();
        assert!(html.contains("id=\"contact\""));
        assert!(!p.smoke_report().unwrap().passed());
    }

    #[test]
    fn default_handler_suppresses_submission() {
        let mut p = page();
        let outcome = p.submit(ENQUIRY_FORM_ID, &VALID).unwrap();
        assert!(!outcome.navigated());
        assert!(outcome.requests().is_empty());
        assert!(matches!(
            outcome,
            SubmitOutcome::Dispatched {
                default_prevented: true,
                ..
            }
        ));
    }

    #[test]
    fn required_fields_block_submission() {
        let mut p = page();
        let outcome = p
            .submit(ENQUIRY_FORM_ID, &[("name", "Ada"), ("email", "not-an-email")])
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                invalid: vec!["phone".to_string(), "email".to_string()]
            }
        );
        assert!(!outcome.navigated());
    }

    #[test]
    fn whitespace_only_text_satisfies_required_but_email_does_not() {
        let mut p = page();
        let outcome = p
            .submit(
                ENQUIRY_FORM_ID,
                &[
                    ("name", "   "),
                    ("phone", " "),
                    ("email", "  ada@example.com  "),
                    ("message", "hi"),
                ],
            )
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::Dispatched { .. }));

        let outcome = p
            .submit(
                ENQUIRY_FORM_ID,
                &[("name", "Ada"), ("phone", "1"), ("email", "   ")],
            )
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                invalid: vec!["email".to_string()]
            }
        );
    }

    #[test]
    fn unknown_form_is_an_error() {
        let mut p = page();
        assert!(matches!(p.submit("newsletter", &VALID), Err(Error::UnknownForm(_))));
    }

    struct NoPrevent;

    impl FormHandler for NoPrevent {
        fn on_submit(&self, _event: &mut SubmitEvent) -> Vec<OutboundRequest> {
            Vec::new()
        }
    }

    #[test]
    fn handler_that_does_not_prevent_navigates() {
        let mut p = page().with_form_handler(NoPrevent);
        let outcome = p.submit(ENQUIRY_FORM_ID, &VALID).unwrap();
        assert!(outcome.navigated());
    }

    #[test]
    fn event_field_lookup() {
        let ev = SubmitEvent::new("f", vec![("a".into(), "1".into())]);
        assert_eq!(ev.field("a"), Some("1"));
        assert_eq!(ev.field("b"), None);
        assert!(!ev.default_prevented());
    }
}
