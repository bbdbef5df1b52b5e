//! Home page body

use stairworks_core::{ActiveModel, SiteMeta};

use super::{escape_html, url_with_query};

pub fn render_home(site: &SiteMeta, models: &[ActiveModel]) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str(&format!(
        r#"<section class="hero"><h1>{}</h1><p>{}</p><a class="button" href="/configurator">Configure your staircase</a></section>"#,
        escape_html(&site.company),
        escape_html(&site.description)
    ));

    if !models.is_empty() {
        out.push_str(r#"<section class="models"><h2>Our stairs</h2><ul class="model-list">"#);
        for model in models {
            let href = url_with_query("/configurator", &[("model", Some(model.name.as_str()))]);
            out.push_str(&format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&href),
                escape_html(display_label(model))
            ));
        }
        out.push_str("</ul></section>");
    }

    out.push_str(
        r#"<section class="faq-teaser"><p>Questions about lead times or installation? <a href="/faq">Read the FAQ</a>.</p></section>"#,
    );
    out
}

/// Model label, falling back to its name
pub fn display_label(model: &ActiveModel) -> &str {
    if model.label.is_empty() {
        &model.name
    } else {
        &model.label
    }
}
