//! Brand, palette and contact details shared by every section of the page.

use serde::{Deserialize, Serialize};

/// Theme record read by every rendering section.
///
/// The defaults are the S‑Rock Care Services brand. A theme is built once
/// (usually as part of [`crate::config::SiteConfig`]) and only ever read
/// afterwards.
///
/// ```
/// let theme = carepage::Theme::default();
/// assert_eq!(theme.colours.primary, "#7133a0");
/// assert_eq!(theme.tel_uri(), "tel:+443330903986");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub brand: Brand,
    pub colours: Palette,
    /// Display form of the contact phone number
    pub phone: String,
    /// Country calling code substituted for a leading trunk `0` in `tel:` links
    pub phone_country_code: String,
    pub email: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            colours: Palette::default(),
            phone: "0333 090 3986".to_string(),
            phone_country_code: "44".to_string(),
            email: "hello@srockcareservices.co.uk".to_string(),
        }
    }
}

impl Theme {
    /// `tel:` URI for the configured phone number.
    ///
    /// Formatting characters are dropped and a national trunk prefix is
    /// replaced by the country code.
    pub fn tel_uri(&self) -> String {
        let trimmed = self.phone.trim();
        // "+44 (0)1793 ..." marks a trunk prefix that is not dialled internationally
        let digits: String = trimmed
            .replace("(0)", "")
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if trimmed.starts_with('+') {
            format!("tel:+{}", digits)
        } else if let Some(national) = digits.strip_prefix('0') {
            format!("tel:+{}{}", self.phone_country_code, national)
        } else {
            format!("tel:{}", digits)
        }
    }

    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub logo: LogoSource,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "S‑Rock Care Services".to_string(),
            logo: LogoSource::default(),
        }
    }
}

/// Where the header logo comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogoSource {
    /// A static file shipped with the site, relative to the base path
    Asset { path: String },
    /// A generated inline image
    Placeholder { label: String, width: u32, height: u32 },
}

impl Default for LogoSource {
    fn default() -> Self {
        LogoSource::Placeholder {
            label: "S‑Rock Care".to_string(),
            width: 180,
            height: 48,
        }
    }
}

/// Colour palette. Values are CSS colours, normally `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub accent: String,
    /// Background tint for the page and alternating sections
    pub light: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#7133a0".to_string(),
            accent: "#9c7db2".to_string(),
            light: "#f9f3f9".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_brand() {
        let t = Theme::default();
        assert_eq!(t.brand.name, "S‑Rock Care Services");
        assert_eq!(t.colours.accent, "#9c7db2");
        assert_eq!(t.colours.light, "#f9f3f9");
        assert!(matches!(t.brand.logo, LogoSource::Placeholder { .. }));
    }

    #[test]
    fn tel_uri_variants() {
        let mut t = Theme::default();
        assert_eq!(t.tel_uri(), "tel:+443330903986");

        t.phone = "+44 (0)1793 123456".to_string();
        assert_eq!(t.tel_uri(), "tel:+441793123456");

        t.phone = "+44 (0) 20 7946 0000".to_string();
        assert_eq!(t.tel_uri(), "tel:+442079460000");

        t.phone = "01793 123456".to_string();
        assert_eq!(t.tel_uri(), "tel:+441793123456");

        t.phone = "999".to_string();
        assert_eq!(t.tel_uri(), "tel:999");
    }

    #[test]
    fn mailto_uri_uses_email() {
        let t = Theme::default();
        assert_eq!(t.mailto_uri(), "mailto:hello@srockcareservices.co.uk");
    }

    #[test]
    fn logo_source_deserializes_tagged() {
        let logo: LogoSource =
            serde_json::from_str(r#"{"kind":"asset","path":"resources/s_rock.png"}"#).unwrap();
        assert_eq!(
            logo,
            LogoSource::Asset {
                path: "resources/s_rock.png".to_string()
            }
        );
    }

    #[test]
    fn partial_theme_keeps_defaults() {
        let t: Theme = serde_json::from_str(r#"{"phone":"01793 000000"}"#).unwrap();
        assert_eq!(t.phone, "01793 000000");
        assert_eq!(t.colours, Palette::default());
    }
}
