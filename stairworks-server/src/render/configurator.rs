//! Configurator page body: model switcher, preview and swatch gallery

use stairworks_core::{ActiveModel, Catalog, FinishId, SwatchProps};

use super::home::display_label;
use super::swatch::{render_gallery, GalleryForm};
use super::{escape_html, url_with_query};

pub const PICK_ACTION: &str = "/configurator/pick";

/// Render the configurator for the caller's current selection.
///
/// `model` is `None` when no model is active; `finish` may name a finish the
/// model does not support, in which case nothing is marked active.
pub fn render_configurator(
    catalog: &Catalog,
    model: Option<&ActiveModel>,
    finish: Option<&FinishId>,
) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(r#"<section class="configurator"><h1>Configure your staircase</h1>"#);

    render_model_switcher(&mut out, catalog.models(), model, finish);

    let props = SwatchProps {
        swatches: catalog.finishes(),
        active_model: model,
        active_color: finish,
        color_hex: catalog.color_hex(),
    };
    let items = props.items();

    match model {
        None => out.push_str(
            r#"<p class="configurator-hint">Choose a model to see the finishes available for it.</p>"#,
        ),
        Some(model) => {
            let preview = finish.and_then(|id| {
                items
                    .iter()
                    .find(|item| item.id() == id)
                    .and_then(|_| model.variants_for(id.as_str()))
                    .and_then(<[String]>::first)
            });
            match preview {
                Some(src) => {
                    out.push_str(&format!(
                        r#"<figure class="configurator-preview"><img src="{}" alt="{}"></figure>"#,
                        escape_html(src),
                        escape_html(display_label(model))
                    ));
                }
                None => out.push_str(
                    r#"<p class="configurator-hint">Pick a finish to preview it.</p>"#,
                ),
            }
        }
    }

    out.push_str(&render_gallery(
        &items,
        GalleryForm {
            action: PICK_ACTION,
            model: model.map(|m| m.name.as_str()),
            finish: finish.map(FinishId::as_str),
        },
    ));
    out.push_str("</section>");
    out
}

fn render_model_switcher(
    out: &mut String,
    models: &[ActiveModel],
    active: Option<&ActiveModel>,
    finish: Option<&FinishId>,
) {
    out.push_str(r#"<nav class="model-switcher" aria-label="Models"><ul>"#);
    for model in models {
        let href = url_with_query(
            "/configurator",
            &[
                ("model", Some(model.name.as_str())),
                ("finish", finish.map(FinishId::as_str)),
            ],
        );
        let current = if active.is_some_and(|active| active.name == model.name) {
            r#" aria-current="true""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<li><a href="{}"{}>{}</a></li>"#,
            escape_html(&href),
            current,
            escape_html(display_label(model))
        ));
    }
    out.push_str("</ul></nav>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use stairworks_core::FinishEntry;

    fn catalog() -> Catalog {
        let entries = vec![
            FinishEntry {
                id: "oak".to_string(),
                label: "Oak".to_string(),
                hex: None,
            },
            FinishEntry {
                id: "walnut".to_string(),
                label: "Walnut".to_string(),
                hex: Some("#5b3a29".to_string()),
            },
        ];
        let models = vec![
            ActiveModel::new("straight", "Straight").with_variant("oak", ["oak1.png"]),
            ActiveModel::new("spiral", "Spiral").with_variant("walnut", ["walnut1.png"]),
        ];
        Catalog::from_entries(&entries, models).unwrap()
    }

    #[test]
    fn without_model_shows_hint_and_empty_gallery() {
        let catalog = catalog();
        let html = render_configurator(&catalog, None, None);

        assert!(html.contains("Choose a model"));
        assert!(!html.contains("<button"));
        assert!(html.contains(r#"<a href="/configurator?model=straight">Straight</a>"#));
    }

    #[test]
    fn active_finish_is_previewed() {
        let catalog = catalog();
        let finish = FinishId::new("oak");
        let html = render_configurator(&catalog, catalog.model("straight"), Some(&finish));

        assert!(html.contains(r#"<img src="oak1.png" alt="Straight">"#));
        assert!(html.contains("swatch--active"));
        assert!(html.contains(r#"name="model" value="straight""#));
    }

    #[test]
    fn switcher_links_keep_the_finish() {
        let catalog = catalog();
        let finish = FinishId::new("oak");
        let html = render_configurator(&catalog, catalog.model("straight"), Some(&finish));

        assert!(html.contains(
            r#"<a href="/configurator?model=straight&amp;finish=oak" aria-current="true">"#
        ));
        assert!(html.contains(r#"<a href="/configurator?model=spiral&amp;finish=oak">"#));
    }

    #[test]
    fn unsupported_finish_is_not_previewed() {
        let catalog = catalog();
        let finish = FinishId::new("oak");
        let html = render_configurator(&catalog, catalog.model("spiral"), Some(&finish));

        assert!(html.contains("Pick a finish"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("swatch--active"));
        assert!(html.contains(r#"data-finish-id="walnut""#));
    }
}
