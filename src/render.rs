//! Page composition.
//!
//! The page is built with `maud`, so every interpolated value is escaped.
//! Sections are rendered in a fixed order: header, hero, services, values,
//! areas, reviews, contact, footer.

use maud::{html, Markup, DOCTYPE};
use scraper::Html;

use crate::config::{BasePath, SiteConfig};
use crate::content::{
    NavLink, Service, Testimonial, AREAS_COVERED, ENQUIRY_FORM_ID, EXPECTATIONS, FEATURED_QUOTE,
    FOOTER_LINKS, MAP_EMBED_URL, MAP_ORIGIN, NAV_LINKS, SERVICES, TESTIMONIALS, VALUES,
};
use crate::placeholder::Placeholder;
use crate::style::Variant;
use crate::theme::{LogoSource, Theme};

/// Stylesheet path relative to the site root
pub const STYLESHEET_PATH: &str = "assets/site.css";
/// Script path relative to the site root
pub const SCRIPT_PATH: &str = "assets/site.js";

/// Policy sent with the page, both as a `<meta>` tag and by the preview server.
pub fn content_security_policy() -> String {
    format!(
        "default-src 'self'; img-src 'self' data:; style-src 'self'; script-src 'self'; \
         frame-src {}; form-action 'none'; base-uri 'self'; object-src 'none'",
        MAP_ORIGIN
    )
}

/// A rendered HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    /// Wrap markup produced elsewhere, e.g. a file being checked.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Parse into a DOM tree for inspection.
    pub fn parse(&self) -> Html {
        Html::parse_document(&self.html)
    }
}

/// Render the full page.
pub fn render_page(config: &SiteConfig) -> Document {
    let theme = &config.theme;
    let base = &config.base_path;
    let markup = html! {
        (DOCTYPE)
        html lang="en-GB" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta http-equiv="Content-Security-Policy" content=(content_security_policy());
                title { (theme.brand.name) " — Homecare in Swindon" }
                link rel="stylesheet" href=(base.asset_url(STYLESHEET_PATH));
                script src=(base.asset_url(SCRIPT_PATH)) defer {}
            }
            body {
                (header(theme, base))
                (hero(theme))
                (services())
                (values(theme))
                (areas())
                (reviews())
                (contact(theme))
                (footer(theme, config.copyright_year()))
            }
        }
    };
    Document {
        html: markup.into_string(),
    }
}

fn logo_src(logo: &LogoSource, theme: &Theme, base: &BasePath) -> String {
    match logo {
        LogoSource::Asset { path } => base.asset_url(path),
        LogoSource::Placeholder { label, width, height } => Placeholder::new(label.as_str(), *width, *height)
            .background("#ffffff")
            .foreground(theme.colours.primary.as_str())
            .to_data_uri(),
    }
}

fn photo(label: &str, width: u32, height: u32, theme: &Theme) -> String {
    Placeholder::new(label, width, height)
        .background(theme.colours.light.as_str())
        .foreground(theme.colours.primary.as_str())
        .to_data_uri()
}

fn container(extra_class: &str, body: Markup) -> Markup {
    let class = if extra_class.is_empty() {
        "container".to_string()
    } else {
        format!("container {}", extra_class)
    };
    html! {
        div class=(class) { (body) }
    }
}

fn button(label: &str, href: &str, variant: Variant) -> Markup {
    html! {
        a href=(href) class=(variant.style().class) { (label) }
    }
}

fn cta(label: &str) -> Markup {
    button(label, "#contact", Variant::Primary)
}

fn nav_link(link: &NavLink) -> Markup {
    html! {
        a href=(link.href()) { (link.label) }
    }
}

fn header(theme: &Theme, base: &BasePath) -> Markup {
    let name = &theme.brand.name;
    html! {
        header class="site-header" {
            (container("", html! {
                div class="brand" {
                    img class="logo" src=(logo_src(&theme.brand.logo, theme, base)) alt={ (name) " logo" };
                    span class="sr-only" { (name) }
                }
                nav class="nav" {
                    @for link in &NAV_LINKS {
                        (nav_link(link))
                    }
                }
                div class="header-actions" {
                    a class="header-call" href=(theme.tel_uri()) { "Call " (theme.phone) }
                    (cta("Request Homecare"))
                }
            }))
        }
    }
}

fn hero(theme: &Theme) -> Markup {
    html! {
        section class="hero" {
            svg aria-hidden="true" class="hero-circle" viewBox="0 0 200 200" {
                circle cx="100" cy="100" r="100" fill="white" {}
            }
            (container("", html! {
                div class="hero-copy" {
                    h1 { "Compassionate homecare in Swindon — dependable, dignified, person‑centred" }
                    p class="hero-lead" {
                        "Reliable support for everyday living, delivered by friendly, well‑trained Care Professionals. "
                        "Longer visit times, punctual service, and care plans built around you."
                    }
                    div class="cta-row" {
                        (button("Request Homecare Today", "#contact", Variant::Primary))
                        (button("Explore Services", "#services", Variant::Secondary))
                    }
                    p class="hero-note" { "Video or phone consultations available 7 days a week." }
                }
                div class="hero-media" {
                    img class="hero-image"
                        src=(photo("Care professional supporting client at home", 1400, 900, theme))
                        alt="Care professional supporting client at home";
                    div class="stat-card" {
                        p { strong { "Average visit length" } }
                        p class="stat-value" { "45–60 mins" }
                        p class="muted" { small { "Because quality care takes time." } }
                    }
                }
            }))
        }
    }
}

fn service_card(service: &Service) -> Markup {
    html! {
        div class="card" {
            div class="card-icon" aria-hidden="true" { (service.icon) }
            h3 { (service.title) }
            p class="muted" { (service.text) }
            a class="card-link" href="#contact" { "Enquire about " (service.title) " →" }
        }
    }
}

fn services() -> Markup {
    html! {
        section id="services" class="section section-white" {
            (container("", html! {
                h2 { "Homecare Services in Swindon: What we offer" }
                p class="muted" { "Flexible, person‑centred care plans reviewed regularly to match changing needs." }
                div class="grid-services" {
                    @for service in &SERVICES {
                        (service_card(service))
                    }
                }
            }))
        }
    }
}

fn tick() -> Markup {
    html! {
        span class="tick" {
            svg viewBox="0 0 20 20" fill="white" aria-hidden="true" {
                path d="M16.707 5.293a1 1 0 00-1.414-1.414L8 11.172 4.707 7.879A1 1 0 003.293 9.293l4 4a1 1 0 001.414 0l8-8z" {}
            }
        }
    }
}

fn quote(testimonial: &Testimonial, class: &str) -> Markup {
    html! {
        figure class=(class) {
            blockquote class="quote" { "“" (testimonial.quote) "”" }
            figcaption class="attribution" { "— " (testimonial.name) }
        }
    }
}

fn values(theme: &Theme) -> Markup {
    html! {
        section id="values" class="section section-light" {
            (container("split", html! {
                div {
                    h2 { "Why families choose S‑Rock Care" }
                    ul class="checklist" {
                        @for line in &VALUES {
                            li { (tick()) span { (line) } }
                        }
                    }
                    div class="cta-row" { (cta("Start your care plan")) }
                }
                div class="card card-lg" {
                    (quote(&FEATURED_QUOTE, "featured"))
                    div class="gallery" {
                        img src=(photo("Caregiver preparing tea", 1200, 800, theme)) alt="Caregiver preparing tea";
                        img src=(photo("Friendly conversation", 1200, 800, theme)) alt="Friendly conversation";
                    }
                }
            }))
        }
    }
}

fn areas() -> Markup {
    html! {
        section id="areas" class="section section-white" {
            (container("", html! {
                h2 { "Areas we cover" }
                p class="muted" { (AREAS_COVERED) }
                div class="map-frame" {
                    iframe title="Swindon map" loading="lazy" referrerpolicy="no-referrer-when-downgrade"
                        src=(MAP_EMBED_URL) allowfullscreen {}
                }
            }))
        }
    }
}

fn reviews() -> Markup {
    html! {
        section id="reviews" class="section section-light" {
            (container("split", html! {
                div {
                    h2 { "Kind words from clients" }
                    p class="muted" {
                        "A selection of recent comments. We’re happy to connect you with local families for references."
                    }
                    @for testimonial in &TESTIMONIALS {
                        (quote(testimonial, "card"))
                    }
                }
                div class="card card-lg" {
                    h3 { "What to expect from us" }
                    ul class="bullets" {
                        @for line in &EXPECTATIONS {
                            li { (line) }
                        }
                    }
                    div class="cta-row" { (cta("Book a friendly chat")) }
                }
            }))
        }
    }
}

fn enquiry_form() -> Markup {
    html! {
        form id=(ENQUIRY_FORM_ID) class="enquiry" {
            div class="field-row" {
                input type="text" name="name" required placeholder="Full name";
                input type="tel" name="phone" required placeholder="Phone";
            }
            input type="email" name="email" required placeholder="Email";
            textarea name="message" rows="4" placeholder="How can we help?" {}
            label class="consent" {
                input type="checkbox" id="consent" name="consent";
                span { "I consent to S‑Rock Care contacting me about my enquiry." }
            }
            button type="submit" class=(Variant::Primary.style().class) { "Send enquiry" }
        }
    }
}

fn contact(theme: &Theme) -> Markup {
    let tel = theme.tel_uri();
    html! {
        section id="contact" class="section section-white" {
            (container("split", html! {
                div {
                    h2 { "Request homecare today" }
                    p class="muted" {
                        "Tell us a little about your situation and how we can help. Prefer to talk? Call "
                        a href=(tel) { strong { (theme.phone) } }
                        "."
                    }
                    (enquiry_form())
                }
                div class="card card-lg" {
                    h3 { "Office" }
                    p class="muted" { "Swindon, Wiltshire • Open 7 days for enquiries" }
                    div class="contact-links" {
                        a href=(tel) { span aria-hidden="true" { "📞" } strong { (theme.phone) } }
                        a href=(theme.mailto_uri()) { span aria-hidden="true" { "✉️" } (theme.email) }
                    }
                    div class="card" {
                        p { strong { "New to care at home?" } }
                        p class="muted" {
                            "We’ll guide you step‑by‑step, from first call to personalised plan and regular reviews."
                        }
                    }
                }
            }))
        }
    }
}

fn footer(theme: &Theme, year: i32) -> Markup {
    html! {
        footer class="site-footer" {
            (container("", html! {
                p class="muted" { "© " (year) " " (theme.brand.name) ". All rights reserved." }
                div class="legal" {
                    @for label in &FOOTER_LINKS {
                        a href="#" { (label) }
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn rendered() -> Document {
        render_page(&SiteConfig {
            year: Some(2025),
            ..Default::default()
        })
    }

    fn count(doc: &Html, css: &str) -> usize {
        doc.select(&Selector::parse(css).unwrap()).count()
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let doc = rendered();
        let html = doc.html();
        let positions: Vec<usize> = [
            "class=\"site-header\"",
            "class=\"hero\"",
            "id=\"services\"",
            "id=\"values\"",
            "id=\"areas\"",
            "id=\"reviews\"",
            "id=\"contact\"",
            "class=\"site-footer\"",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn content_lists_are_rendered() {
        let dom = rendered().parse();
        assert_eq!(count(&dom, "#services .card"), 6);
        assert_eq!(count(&dom, "#values .checklist li"), 5);
        assert_eq!(count(&dom, "#reviews figure"), 2);
        assert_eq!(count(&dom, "#reviews .bullets li"), 4);
        assert_eq!(count(&dom, "footer .legal a"), 4);
        assert_eq!(count(&dom, "nav a"), 5);
    }

    #[test]
    fn no_inline_styles_or_scripts() {
        let dom = rendered().parse();
        assert_eq!(count(&dom, "[style]"), 0);
        let scripts = Selector::parse("script").unwrap();
        for script in dom.select(&scripts) {
            assert!(script.value().attr("src").is_some());
            assert!(script.text().collect::<String>().trim().is_empty());
        }
    }

    #[test]
    fn contact_links_use_theme() {
        let html = rendered().into_string();
        assert!(html.contains("href=\"tel:+443330903986\""));
        assert!(html.contains("href=\"mailto:hello@srockcareservices.co.uk\""));
        assert!(html.contains("Call 0333 090 3986"));
    }

    #[test]
    fn footer_carries_year_and_brand() {
        let html = rendered().into_string();
        assert!(html.contains("© 2025 S‑Rock Care Services. All rights reserved."));
    }

    #[test]
    fn assets_resolve_under_base_path() {
        let cfg = SiteConfig {
            base_path: BasePath::new("care-agency-webpage"),
            year: Some(2025),
            ..Default::default()
        };
        let html = render_page(&cfg).into_string();
        assert!(html.contains("href=\"/care-agency-webpage/assets/site.css\""));
        assert!(html.contains("src=\"/care-agency-webpage/assets/site.js\""));
    }

    #[test]
    fn asset_logo_uses_base_path() {
        let mut cfg = SiteConfig {
            base_path: BasePath::new("care-agency-webpage"),
            year: Some(2025),
            ..Default::default()
        };
        cfg.theme.brand.logo = LogoSource::Asset {
            path: "resources/s_rock.png".to_string(),
        };
        let dom = render_page(&cfg).parse();
        let logo = dom.select(&Selector::parse("img.logo").unwrap()).next().unwrap();
        assert_eq!(logo.value().attr("src"), Some("/care-agency-webpage/resources/s_rock.png"));
        assert_eq!(logo.value().attr("alt"), Some("S‑Rock Care Services logo"));
    }

    #[test]
    fn brand_name_is_escaped() {
        let mut cfg = SiteConfig {
            year: Some(2025),
            ..Default::default()
        };
        cfg.theme.brand.name = "<b>Care & Co</b>".to_string();
        let html = render_page(&cfg).into_string();
        assert!(html.contains("&lt;b&gt;Care &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("<b>Care"));
    }

    #[test]
    fn enquiry_form_fields() {
        let dom = rendered().parse();
        assert_eq!(count(&dom, "form#enquiry"), 1);
        assert_eq!(count(&dom, "form#enquiry [required]"), 3);
        assert_eq!(count(&dom, "form#enquiry input[type=email]"), 1);
        assert_eq!(count(&dom, "form#enquiry[action]"), 0);
    }

    #[test]
    fn csp_meta_is_present() {
        let html = rendered().into_string();
        assert!(html.contains("http-equiv=\"Content-Security-Policy\""));
        assert!(content_security_policy().contains("img-src 'self' data:"));
        assert!(content_security_policy().contains("frame-src https://www.google.com"));
    }
}
