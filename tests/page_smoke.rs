//! Structural checks over the rendered page

use carepage::content::{ENQUIRY_FORM_ID, SECTION_IDS};
use carepage::smoke::{is_hex_colour, Check};
use carepage::{render_page, verify, BasePath, Document, Page, SiteConfig, Theme};
use scraper::Selector;

fn config() -> SiteConfig {
    SiteConfig {
        year: Some(2025),
        origin: "https://example.github.io".to_string(),
        base_path: BasePath::new("care-agency-webpage"),
        ..Default::default()
    }
}

#[test]
fn configured_colours_are_hex() {
    let colours = Theme::default().colours;
    for value in [&colours.primary, &colours.accent, &colours.light] {
        assert!(is_hex_colour(value), "{} is not #RRGGBB", value);
    }
}

#[test]
fn each_section_id_appears_once() {
    let dom = render_page(&config()).parse();
    let any_id = Selector::parse("[id]").unwrap();
    for id in SECTION_IDS {
        let n = dom
            .select(&any_id)
            .filter(|el| el.value().id() == Some(id))
            .count();
        assert_eq!(n, 1, "section #{}", id);
    }
}

#[test]
fn every_image_is_inline_or_same_origin() {
    let cfg = config();
    let dom = render_page(&cfg).parse();
    let imgs = Selector::parse("img").unwrap();
    let srcs: Vec<String> = dom
        .select(&imgs)
        .filter_map(|img| img.value().attr("src").map(str::to_string))
        .collect();
    assert_eq!(srcs.len(), 4);
    for src in &srcs {
        assert!(src.starts_with("data:image/svg+xml"), "{}", src);
    }
    assert!(verify(&cfg, &render_page(&cfg)).passed());
}

#[test]
fn cross_origin_image_is_caught() {
    let cfg = config();
    let html = render_page(&cfg).into_string().replace(
        "<img class=\"hero-image\"",
        "<img src=\"https://images.unsplash.com/photo-1584515933487-779824d29309?q=80\" data-old",
    );
    let report = verify(&cfg, &Document::from_html(html));
    assert!(!report.passed());
    assert!(report
        .failures()
        .all(|o| o.check == Check::ImageOrigin && o.detail.contains("unsplash")));
}

#[test]
fn same_origin_asset_logo_passes() {
    let mut cfg = config();
    cfg.theme.brand.logo = carepage::LogoSource::Asset {
        path: "resources/s_rock.png".to_string(),
    };
    let report = verify(&cfg, &render_page(&cfg));
    assert!(report.passed());
}

#[test]
fn nav_links_target_rendered_sections() {
    let dom = render_page(&config()).parse();
    let nav_links = Selector::parse("nav a").unwrap();
    let any_id = Selector::parse("[id]").unwrap();
    let ids: Vec<&str> = dom.select(&any_id).filter_map(|el| el.value().id()).collect();
    for a in dom.select(&nav_links) {
        let href = a.value().attr("href").unwrap();
        let target = href.strip_prefix('#').expect("in-page anchor");
        assert!(ids.contains(&target), "{} has no target", href);
    }
}

#[test]
fn simulated_submit_stays_on_page_without_requests() {
    let mut page = Page::new(config());
    let outcome = page
        .submit(
            ENQUIRY_FORM_ID,
            &[
                ("name", "Jo Bloggs"),
                ("phone", "07700 900000"),
                ("email", "jo@example.com"),
                ("consent", "on"),
            ],
        )
        .unwrap();
    assert!(!outcome.navigated());
    assert!(outcome.requests().is_empty());
    assert_eq!(page.smoke_runs(), 1);
}
