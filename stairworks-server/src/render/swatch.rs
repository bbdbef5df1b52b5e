//! HTML for the swatch gallery
//!
//! One `<button>` per rendered swatch inside a POST form, so activating a
//! swatch submits `pick=<id>` to the configurator's pick route.

use stairworks_core::{SwatchFill, SwatchItem};

use super::{escape_css_string, escape_html};

/// Hidden form fields that carry the caller's current selection
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryForm<'a> {
    pub action: &'a str,
    pub model: Option<&'a str>,
    pub finish: Option<&'a str>,
}

/// Inline style for a swatch chip, or `None` for a bare circle
pub fn fill_style(fill: Option<SwatchFill<'_>>) -> Option<String> {
    match fill {
        Some(SwatchFill::Image(src)) => Some(format!(
            "background-image:url(\"{}\");background-size:cover;background-position:center",
            escape_css_string(src)
        )),
        Some(SwatchFill::Color(color)) => Some(format!("background-color:{}", color)),
        None => None,
    }
}

/// Render a single swatch button
pub fn render_swatch(out: &mut String, item: &SwatchItem<'_>) {
    let id = escape_html(item.id().as_str());
    let label = escape_html(&item.finish.label);
    let class = if item.active {
        "swatch swatch--active"
    } else {
        "swatch"
    };

    out.push_str(&format!(
        r#"<button type="submit" class="{class}" name="pick" value="{id}" data-finish-id="{id}" aria-pressed="{pressed}" title="{label}">"#,
        pressed = item.active,
    ));
    match fill_style(item.fill) {
        Some(style) => {
            out.push_str(&format!(
                r#"<span class="swatch-chip" style="{}"></span>"#,
                escape_html(&style)
            ));
        }
        None => out.push_str(r#"<span class="swatch-chip swatch-chip--bare"></span>"#),
    }
    out.push_str(&format!(r#"<span class="swatch-label">{label}</span></button>"#));
}

/// Render the whole gallery. An empty item list renders an empty gallery.
pub fn render_gallery(items: &[SwatchItem<'_>], form: GalleryForm<'_>) -> String {
    let mut out = String::with_capacity(256 + items.len() * 256);

    out.push_str(&format!(
        r#"<form method="post" action="{}" class="swatch-form">"#,
        escape_html(form.action)
    ));
    for (name, value) in [("model", form.model), ("finish", form.finish)] {
        if let Some(value) = value {
            out.push_str(&format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                name,
                escape_html(value)
            ));
        }
    }

    out.push_str(
        r#"<div class="swatch-gallery" role="group" aria-label="Finishes" style="display:flex;flex-wrap:wrap;justify-content:center;gap:1rem">"#,
    );
    for item in items {
        render_swatch(&mut out, item);
    }
    out.push_str("</div></form>");
    out
}
