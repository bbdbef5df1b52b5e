//! Site-wide layout metadata: title, description, fonts, navigation

use serde::{Deserialize, Serialize};

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub company: String,
    pub lang: String,
    pub theme_color: String,
    pub fonts: Vec<FontSpec>,
    pub nav: Vec<NavLink>,
}

/// A web font exposed to the stylesheet as a CSS variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    /// CSS custom property, e.g. `--font-heading`
    pub variable: String,
    #[serde(default)]
    pub weights: Vec<u16>,
    #[serde(default = "default_display")]
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

fn default_display() -> String {
    "swap".to_string()
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Stairworks Custom Staircases".to_string(),
            description: "Made-to-measure floating, spiral and L-shaped staircases in oak, \
                          walnut, ash and steel. Configure yours online."
                .to_string(),
            company: "Stairworks".to_string(),
            lang: "en".to_string(),
            theme_color: "#1f1b16".to_string(),
            fonts: vec![
                FontSpec {
                    family: "Playfair Display".to_string(),
                    variable: "--font-heading".to_string(),
                    weights: vec![500, 700],
                    display: default_display(),
                },
                FontSpec {
                    family: "Inter".to_string(),
                    variable: "--font-body".to_string(),
                    weights: vec![400, 600],
                    display: default_display(),
                },
            ],
            nav: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Configurator", "/configurator"),
                NavLink::new("FAQ", "/faq"),
            ],
        }
    }
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl SiteMeta {
    /// `<title>` text for a page; the home page uses the bare site title
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.is_empty() => format!("{} | {}", page, self.title),
            _ => self.title.clone(),
        }
    }

    /// Stylesheet URL loading every configured font in one request.
    ///
    /// Returns `None` when no fonts are configured.
    pub fn fonts_stylesheet_url(&self) -> Option<String> {
        if self.fonts.is_empty() {
            return None;
        }

        let families: Vec<String> = self.fonts.iter().map(FontSpec::query_param).collect();
        // Google Fonts takes a single display value per request.
        let display = self.fonts[0].display.as_str();
        Some(format!(
            "{}?{}&display={}",
            GOOGLE_FONTS_CSS,
            families.join("&"),
            display
        ))
    }
}

impl FontSpec {
    /// `family=Inter:wght@400;600`
    fn query_param(&self) -> String {
        let family = self.family.replace(' ', "+");
        if self.weights.is_empty() {
            return format!("family={}", family);
        }
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();
        let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
        format!("family={}:wght@{}", family, weights.join(";"))
    }
}
