//! Page shell: document head, fonts, navigation and footer

use stairworks_core::SiteMeta;

use super::escape_html;

/// Per-page metadata
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'a> {
    /// Page name for `<title>`; `None` for the home page
    pub title: Option<&'a str>,
    /// Request path, used to mark the current nav link
    pub path: &'a str,
    /// Overrides the site description meta tag
    pub description: Option<&'a str>,
}

/// Wrap a page body in the site layout.
///
/// `year` is the copyright year printed in the footer.
pub fn render_page(site: &SiteMeta, page: PageMeta<'_>, body: &str, year: i32) -> String {
    let mut out = String::with_capacity(body.len() + 2048);

    out.push_str(&format!(
        r#"<!doctype html><html lang="{lang}"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><meta name="description" content="{description}"><meta name="theme-color" content="{theme}">"#,
        lang = escape_html(&site.lang),
        title = escape_html(&site.page_title(page.title)),
        description = escape_html(page.description.unwrap_or(&site.description)),
        theme = escape_html(&site.theme_color),
    ));

    if let Some(url) = site.fonts_stylesheet_url() {
        out.push_str(r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#);
        out.push_str(r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#);
        out.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(&url)));
    }
    out.push_str(r#"<link rel="stylesheet" href="/assets/site.css"></head>"#);

    let font_vars: String = site
        .fonts
        .iter()
        .map(|font| format!("{}:'{}';", font.variable, font.family))
        .collect();
    if font_vars.is_empty() {
        out.push_str("<body>");
    } else {
        out.push_str(&format!(r#"<body style="{}">"#, escape_html(&font_vars)));
    }

    render_nav(&mut out, site, page.path);
    out.push_str(&format!("<main>{}</main>", body));
    out.push_str(&format!(
        r#"<footer class="site-footer"><p>&copy; {} {}</p></footer></body></html>"#,
        year,
        escape_html(&site.company)
    ));
    out
}

fn render_nav(out: &mut String, site: &SiteMeta, current: &str) {
    out.push_str(&format!(
        r#"<header class="site-header"><a class="brand" href="/">{}</a><nav><ul>"#,
        escape_html(&site.company)
    ));
    for link in &site.nav {
        let current_attr = if link.href == current {
            r#" aria-current="page""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<li><a href="{}"{}>{}</a></li>"#,
            escape_html(&link.href),
            current_attr,
            escape_html(&link.label)
        ));
    }
    out.push_str("</ul></nav></header>");
}
