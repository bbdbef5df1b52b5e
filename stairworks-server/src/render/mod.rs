//! Server-side HTML rendering
//!
//! Plain string building with explicit escaping. Each page renders its body
//! and hands it to [`layout::render_page`] for the shared shell.

pub mod configurator;
pub mod faq;
pub mod home;
pub mod layout;
pub mod swatch;

use std::borrow::Cow;

pub use layout::{render_page, PageMeta};

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape text for a double-quoted CSS string, e.g. inside `url("…")`.
///
/// Control characters cannot appear raw in a CSS string and are written as
/// hex escapes (`\a ` for a newline, `\c ` for a form feed).
pub fn escape_css_string(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| c == '\\' || c == '"' || c.is_control()) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Build `path?key=value&…`, percent-encoding values and skipping `None`
pub fn url_with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value.map(|value| format!("{}={}", key, urlencoding::encode(value)))
        })
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}
