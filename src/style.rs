//! Button variants and the generated stylesheet.
//!
//! The page carries no inline `style` attributes so that it works under a
//! `style-src 'self'` policy. Palette colours reach the markup only through
//! custom properties declared in [`stylesheet`].

use crate::theme::Palette;

/// Visual variant of a call-to-action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

/// Static style record for a button variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Class list applied to the anchor
    pub class: &'static str,
}

const BUTTON_PRIMARY: ButtonStyle = ButtonStyle {
    class: "btn btn-primary",
};

const BUTTON_SECONDARY: ButtonStyle = ButtonStyle {
    class: "btn btn-secondary",
};

impl Variant {
    pub fn style(self) -> ButtonStyle {
        match self {
            Variant::Primary => BUTTON_PRIMARY,
            Variant::Secondary => BUTTON_SECONDARY,
        }
    }
}

const BASE_CSS: &str = r#"*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#1e293b;background:var(--light);line-height:1.5}
img{display:block;max-width:100%}
a{color:inherit}
.sr-only{position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap}
.container{margin:0 auto;width:100%;max-width:80rem;padding:0 1rem}
.site-header{position:sticky;top:0;z-index:40;border-bottom:1px solid #e2e8f0;background:rgba(255,255,255,.9)}
.site-header .container{display:flex;align-items:center;justify-content:space-between;padding-top:.75rem;padding-bottom:.75rem}
.logo{height:2.25rem;width:auto}
.nav{display:none;gap:1.5rem}
.nav a{font-size:.875rem;font-weight:500;text-decoration:none}
.header-actions{display:flex;align-items:center;gap:.75rem}
.header-call{display:none;font-size:.875rem;font-weight:600;text-decoration:none}
.btn{display:inline-flex;align-items:center;justify-content:center;border-radius:1rem;padding:.75rem 1.25rem;font-weight:600;text-decoration:none;box-shadow:0 1px 2px rgba(0,0,0,.05)}
.btn-primary{background:var(--accent);color:#fff}
.btn-primary:hover{opacity:.9}
.btn-secondary{background:#fff;color:#0f172a;border:1px solid #e2e8f0}
.btn-secondary:hover{background:#f8fafc}
.hero{position:relative;overflow:hidden;background:var(--primary)}
.hero-circle{position:absolute;left:-2.5rem;top:-2.5rem;width:16rem;height:16rem;opacity:.1}
.hero .container{display:grid;gap:2.5rem;align-items:center;padding-top:4rem;padding-bottom:4rem}
.hero-copy{color:#fff}
.hero-copy h1{font-size:1.875rem;line-height:1.2;margin:0}
.hero-lead{margin-top:1rem;max-width:36rem;font-size:1.125rem;opacity:.9}
.hero-note{margin-top:1rem;font-size:.875rem;opacity:.8}
.cta-row{margin-top:1.5rem;display:flex;flex-wrap:wrap;gap:.75rem}
.hero-media{position:relative}
.hero-image{width:100%;height:20rem;object-fit:cover;border-radius:1.5rem}
.stat-card{position:absolute;right:-1.5rem;bottom:-1.5rem;background:#fff;border-radius:1rem;padding:1rem}
.stat-value{font-size:1.5rem;font-weight:700;color:var(--accent);margin:0}
.section{padding:4rem 0}
.section-white{background:#fff}
.section-light{background:var(--light)}
.section h2{font-size:1.5rem;margin:0}
.muted{color:#475569}
.split{display:grid;gap:2.5rem}
.grid-services{margin-top:2rem;display:grid;gap:1.5rem}
.card{border:1px solid #e2e8f0;background:#fff;border-radius:1rem;padding:1.5rem}
.card-lg{border-radius:1.5rem}
.card-icon{font-size:1.875rem}
.card-link{display:inline-block;margin-top:1rem;font-size:.875rem;font-weight:600;text-decoration:none;color:var(--primary)}
.checklist{list-style:none;padding:0;margin:1.5rem 0 0}
.checklist li{display:flex;gap:.75rem;align-items:flex-start;margin-bottom:1rem}
.tick{display:inline-flex;align-items:center;justify-content:center;width:1.25rem;height:1.25rem;border-radius:9999px;background:var(--accent);margin-top:.25rem}
.tick svg{width:.875rem;height:.875rem}
.gallery{margin-top:1.5rem;display:grid;grid-template-columns:1fr 1fr;gap:1rem}
.gallery img{height:7rem;width:100%;object-fit:cover;border-radius:.75rem}
.map-frame{margin-top:1.5rem;overflow:hidden;border:1px solid #e2e8f0;border-radius:1rem}
.map-frame iframe{display:block;width:100%;height:18rem;border:0}
.quote{font-size:1.125rem;font-weight:500;margin:0}
.attribution{margin-top:.5rem;font-size:.875rem;color:#64748b}
.bullets{margin-top:.75rem;padding-left:1.25rem}
.enquiry{margin-top:1.5rem;display:grid;gap:1rem}
.field-row{display:grid;gap:1rem}
.enquiry input[type=text],.enquiry input[type=tel],.enquiry input[type=email],.enquiry textarea{width:100%;border:1px solid #cbd5e1;border-radius:.75rem;padding:.75rem;font:inherit}
.consent{display:flex;align-items:center;gap:.75rem;font-size:.875rem;color:#475569}
.contact-links{margin-top:1rem;display:grid;gap:.75rem;font-size:.875rem}
.contact-links a{display:inline-flex;gap:.5rem;text-decoration:none}
.site-footer{border-top:1px solid #e2e8f0;background:#fff}
.site-footer .container{display:flex;flex-direction:column;align-items:center;justify-content:space-between;gap:1.5rem;padding-top:2.5rem;padding-bottom:2.5rem}
.legal{display:flex;flex-wrap:wrap;gap:1rem;font-size:.75rem;color:#64748b}
@media (min-width:768px){
.nav{display:flex}
.header-call{display:block}
.hero .container{grid-template-columns:1fr 1fr;padding-top:5rem;padding-bottom:5rem}
.hero-copy h1{font-size:3rem}
.hero-image{height:28rem}
.split{grid-template-columns:1fr 1fr}
.section{padding:5rem 0}
.section h2{font-size:1.875rem}
.site-footer .container{flex-direction:row}
}
@media (min-width:640px){.grid-services,.field-row{grid-template-columns:1fr 1fr}}
@media (min-width:1024px){.grid-services{grid-template-columns:1fr 1fr 1fr}}
"#;

/// Stylesheet for the page with the palette bound to custom properties.
pub fn stylesheet(palette: &Palette) -> String {
    format!(
        ":root{{--primary:{};--accent:{};--light:{}}}\n{}",
        palette.primary, palette.accent, palette.light, BASE_CSS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_styles() {
        assert_eq!(Variant::default(), Variant::Primary);
        assert_eq!(Variant::Primary.style().class, "btn btn-primary");
        assert_ne!(Variant::Primary.style(), Variant::Secondary.style());
    }

    #[test]
    fn stylesheet_binds_palette() {
        let css = stylesheet(&Palette::default());
        assert!(css.starts_with(":root{--primary:#7133a0;--accent:#9c7db2;--light:#f9f3f9}"));
        assert!(css.contains(".btn-primary{background:var(--accent)"));
    }
}
