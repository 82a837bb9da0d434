use std::fs;

use carepage::site::{digest, MANIFEST_FILE, SITE_SCRIPT};
use carepage::{render_page, BasePath, BuildManifest, SiteBuilder, SiteConfig};

fn config() -> SiteConfig {
    SiteConfig {
        year: Some(2025),
        base_path: BasePath::new("care-agency-webpage"),
        ..Default::default()
    }
}

#[test]
fn build_writes_page_assets_and_manifest() {
    let out = tempfile::tempdir().unwrap();
    let manifest = SiteBuilder::new(config(), out.path()).build().unwrap();

    let keys: Vec<&str> = manifest.files.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["assets/site.css", "assets/site.js", "index.html"]);
    assert_eq!(manifest.base_path, "/care-agency-webpage/");
    assert!(manifest.smoke_passed);

    let index = fs::read(out.path().join("index.html")).unwrap();
    assert_eq!(manifest.files["index.html"].sha256, digest(&index));
    assert_eq!(manifest.files["index.html"].bytes, index.len() as u64);

    let css = fs::read_to_string(out.path().join("assets/site.css")).unwrap();
    assert!(css.contains("--primary:#7133a0"));
    let js = fs::read_to_string(out.path().join("assets/site.js")).unwrap();
    assert_eq!(js, SITE_SCRIPT);

    let reloaded = BuildManifest::load(out.path()).unwrap();
    assert_eq!(reloaded, manifest);
    assert!(out.path().join(MANIFEST_FILE).is_file());
}

#[test]
fn build_with_bad_palette_still_writes_output() {
    let out = tempfile::tempdir().unwrap();
    let mut cfg = config();
    cfg.theme.colours.primary = "purple".to_string();
    let manifest = SiteBuilder::new(cfg, out.path()).build().unwrap();
    assert!(!manifest.smoke_passed);
    assert!(out.path().join("index.html").is_file());
}

#[test]
fn config_file_drives_build() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("site.json");
    fs::write(
        &cfg_path,
        r##"{
            "base_path": "care-agency-webpage",
            "year": 2026,
            "theme": { "brand": { "name": "Test Care", "logo": { "kind": "asset", "path": "resources/s_rock.png" } } }
        }"##,
    )
    .unwrap();
    let cfg = SiteConfig::load(&cfg_path).unwrap();
    let html = render_page(&cfg).into_string();
    assert!(html.contains("© 2026 Test Care."));
    assert!(html.contains("src=\"/care-agency-webpage/resources/s_rock.png\""));
}

#[test]
fn rendering_is_deterministic() {
    // same config, same bytes: placeholders and content are fixed
    let a = digest(render_page(&config()).html().as_bytes());
    let b = digest(render_page(&config()).html().as_bytes());
    assert_eq!(a, b);
}
