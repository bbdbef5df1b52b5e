//! FAQ page body

use stairworks_core::FaqEntry;

use super::escape_html;

pub fn render_faq(entries: &[FaqEntry]) -> String {
    let mut out = String::from(r#"<section class="faq"><h1>Frequently asked questions</h1>"#);

    if entries.is_empty() {
        out.push_str(r#"<p class="faq-empty">No questions yet. Get in touch and ask us directly.</p></section>"#);
        return out;
    }

    out.push_str("<dl>");
    for entry in entries {
        out.push_str(&format!(
            r#"<div class="faq-item"><dt>{}</dt><dd>{}</dd></div>"#,
            escape_html(&entry.question),
            escape_html(&entry.answer)
        ));
    }
    out.push_str("</dl></section>");
    out
}
