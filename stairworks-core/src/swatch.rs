//! Swatch selector for the stair configurator
//!
//! A controlled component: the caller owns the active finish and the
//! active model, passes them in on every render, and receives picks through
//! a callback. The selector keeps no state between renders.
//!
//! ```text
//! swatches ──filter(model supports id)──► SwatchItem { finish, fill, active }
//!                                              │
//!                      activate(id) ───────────┴──► on_pick(id)
//! ```

use serde::Serialize;

use crate::finish::{Finish, FinishId};
use crate::model::{ActiveModel, ColorHexTable};

/// What fills a swatch chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SwatchFill<'a> {
    /// First preview image of the finish under the active model, verbatim
    Image(&'a str),
    /// Solid color from the color table
    Color(&'a str),
}

/// One rendered swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchItem<'a> {
    pub finish: &'a Finish,
    /// `None` renders a bare circle
    pub fill: Option<SwatchFill<'a>>,
    pub active: bool,
}

impl<'a> SwatchItem<'a> {
    /// Id of the finish, borrowed from the catalog
    pub fn id(&self) -> &'a FinishId {
        &self.finish.id
    }
}

/// Read-only inputs of the selector
#[derive(Debug, Clone, Copy)]
pub struct SwatchProps<'a> {
    /// Display order is catalog order
    pub swatches: &'a [Finish],
    pub active_model: Option<&'a ActiveModel>,
    pub active_color: Option<&'a FinishId>,
    pub color_hex: &'a ColorHexTable,
}

impl<'a> SwatchProps<'a> {
    /// Project the catalog onto the finishes the active model can preview.
    ///
    /// With no active model nothing is selectable.
    pub fn items(&self) -> Vec<SwatchItem<'a>> {
        let Some(model) = self.active_model else {
            return Vec::new();
        };
        let color_hex = self.color_hex;
        let active_color = self.active_color;

        self.swatches
            .iter()
            .filter(|finish| model.supports(finish.id.as_str()))
            .map(|finish| SwatchItem {
                finish,
                fill: resolve_fill(finish, model.variants_for(finish.id.as_str()), color_hex),
                active: active_color.is_some_and(|active| *active == finish.id),
            })
            .collect()
    }

    /// True if a swatch with this id would be rendered
    pub fn is_rendered(&self, id: &str) -> bool {
        self.active_model.is_some_and(|model| model.supports(id))
            && self.swatches.iter().any(|finish| finish.id == id)
    }
}

/// Pick the visual for one finish.
///
/// The first preview image wins; without one, fall back to the color table;
/// without a color entry the swatch has no fill.
pub fn resolve_fill<'a>(
    finish: &Finish,
    variants: Option<&'a [String]>,
    color_hex: &'a ColorHexTable,
) -> Option<SwatchFill<'a>> {
    match variants.and_then(<[String]>::first) {
        Some(image) => Some(SwatchFill::Image(image.as_str())),
        None => color_hex.get(finish.id.as_str()).map(SwatchFill::Color),
    }
}

/// Selector bound to its props and the caller's pick callback
pub struct SwatchSelector<'a, F>
where
    F: FnMut(&FinishId),
{
    props: SwatchProps<'a>,
    on_pick: F,
}

impl<'a, F> SwatchSelector<'a, F>
where
    F: FnMut(&FinishId),
{
    pub fn new(props: SwatchProps<'a>, on_pick: F) -> Self {
        Self { props, on_pick }
    }

    pub fn props(&self) -> &SwatchProps<'a> {
        &self.props
    }

    /// Current rendered view. Never invokes the callback.
    pub fn items(&self) -> Vec<SwatchItem<'a>> {
        self.props.items()
    }

    /// User activated the swatch `id`.
    ///
    /// Calls `on_pick` once if that swatch is rendered and returns whether it
    /// did. Ids outside the rendered set are ignored.
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(finish) = self
            .props
            .swatches
            .iter()
            .find(|finish| finish.id == id)
        else {
            return false;
        };
        if !self.props.is_rendered(id) {
            return false;
        }
        (self.on_pick)(&finish.id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Finish> {
        vec![Finish::new("oak", "Oak"), Finish::new("walnut", "Walnut")]
    }

    fn ids(items: &[SwatchItem<'_>]) -> Vec<String> {
        items.iter().map(|item| item.id().to_string()).collect()
    }

    #[test]
    fn absent_model_renders_nothing() {
        let swatches = catalog();
        let color_hex: ColorHexTable = [("oak", "#c8a165"), ("walnut", "#5b3a29")]
            .into_iter()
            .collect();
        let active = FinishId::new("oak");
        let props = SwatchProps {
            swatches: &swatches,
            active_model: None,
            active_color: Some(&active),
            color_hex: &color_hex,
        };

        assert!(props.items().is_empty());
        assert!(!props.is_rendered("oak"));
    }

    #[test]
    fn oak_walnut_scenario() {
        let swatches = catalog();
        let model = ActiveModel::new("straight", "Straight").with_variant("oak", ["oak1.png"]);
        let color_hex: ColorHexTable = [("walnut", "#5b3a29")].into_iter().collect();
        let active = FinishId::new("oak");
        let props = SwatchProps {
            swatches: &swatches,
            active_model: Some(&model),
            active_color: Some(&active),
            color_hex: &color_hex,
        };

        let items = props.items();
        assert_eq!(ids(&items), vec!["oak"]);
        assert_eq!(items[0].fill, Some(SwatchFill::Image("oak1.png")));
        assert!(items[0].active);
    }

    #[test]
    fn model_change_drops_active_marker() {
        let swatches = catalog();
        let model = ActiveModel::new("straight", "Straight").with_variant("walnut", ["walnut1.png"]);
        let color_hex: ColorHexTable = [("walnut", "#5b3a29")].into_iter().collect();
        let active = FinishId::new("oak");
        let props = SwatchProps {
            swatches: &swatches,
            active_model: Some(&model),
            active_color: Some(&active),
            color_hex: &color_hex,
        };

        let items = props.items();
        assert_eq!(ids(&items), vec!["walnut"]);
        assert!(items.iter().all(|item| !item.active));
    }

    #[test]
    fn empty_variant_entry_is_filtered() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M")
            .with_variant("oak", Vec::<String>::new())
            .with_variant("walnut", ["w.png"]);
        let color_hex = ColorHexTable::new();
        let props = SwatchProps {
            swatches: &swatches,
            active_model: Some(&model),
            active_color: None,
            color_hex: &color_hex,
        };

        assert_eq!(ids(&props.items()), vec!["walnut"]);
    }

    #[test]
    fn uses_first_variant_only() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M").with_variant("oak", ["first.png", "second.png"]);
        let color_hex = ColorHexTable::new();
        let props = SwatchProps {
            swatches: &swatches,
            active_model: Some(&model),
            active_color: None,
            color_hex: &color_hex,
        };

        assert_eq!(props.items()[0].fill, Some(SwatchFill::Image("first.png")));
    }

    #[test]
    fn empty_first_variant_passes_through() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M").with_variant("oak", [""]);
        let color_hex: ColorHexTable = [("oak", "#c8a165")].into_iter().collect();
        let props = SwatchProps {
            swatches: &swatches,
            active_model: Some(&model),
            active_color: None,
            color_hex: &color_hex,
        };

        let items = props.items();
        assert_eq!(ids(&items), vec!["oak"]);
        assert_eq!(items[0].fill, Some(SwatchFill::Image("")));
    }

    #[test]
    fn fill_falls_back_to_color_then_nothing() {
        let oak = Finish::new("oak", "Oak");
        let walnut = Finish::new("walnut", "Walnut");
        let color_hex: ColorHexTable = [("walnut", "#5b3a29")].into_iter().collect();

        assert_eq!(
            resolve_fill(&walnut, None, &color_hex),
            Some(SwatchFill::Color("#5b3a29"))
        );
        assert_eq!(
            resolve_fill(&walnut, Some(&[]), &color_hex),
            Some(SwatchFill::Color("#5b3a29"))
        );
        assert_eq!(resolve_fill(&oak, None, &color_hex), None);
    }

    #[test]
    fn render_does_not_pick() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M").with_variant("oak", ["oak1.png"]);
        let color_hex = ColorHexTable::new();
        let mut picks = 0;
        let selector = SwatchSelector::new(
            SwatchProps {
                swatches: &swatches,
                active_model: Some(&model),
                active_color: None,
                color_hex: &color_hex,
            },
            |_: &FinishId| picks += 1,
        );

        let _ = selector.items();
        let _ = selector.items();
        drop(selector);
        assert_eq!(picks, 0);
    }

    #[test]
    fn activate_invokes_on_pick_once() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M")
            .with_variant("oak", ["oak1.png"])
            .with_variant("walnut", ["walnut1.png"]);
        let color_hex = ColorHexTable::new();
        let mut picked = Vec::new();
        let mut selector = SwatchSelector::new(
            SwatchProps {
                swatches: &swatches,
                active_model: Some(&model),
                active_color: None,
                color_hex: &color_hex,
            },
            |id: &FinishId| picked.push(id.clone()),
        );

        assert!(selector.activate("walnut"));
        drop(selector);
        assert_eq!(picked, vec![FinishId::new("walnut")]);
    }

    #[test]
    fn activate_ignores_filtered_and_unknown_ids() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M").with_variant("oak", ["oak1.png"]);
        let color_hex = ColorHexTable::new();
        let mut picks = 0;
        let mut selector = SwatchSelector::new(
            SwatchProps {
                swatches: &swatches,
                active_model: Some(&model),
                active_color: None,
                color_hex: &color_hex,
            },
            |_: &FinishId| picks += 1,
        );

        assert!(!selector.activate("walnut"));
        assert!(!selector.activate("maple"));
        drop(selector);
        assert_eq!(picks, 0);
    }

    #[test]
    fn ids_borrow_from_the_catalog() {
        let swatches = catalog();
        let model = ActiveModel::new("m", "M")
            .with_variant("oak", ["oak1.png"])
            .with_variant("walnut", ["walnut1.png"]);
        let color_hex = ColorHexTable::new();
        let props = SwatchProps {
            swatches: &swatches,
            active_model: Some(&model),
            active_color: None,
            color_hex: &color_hex,
        };

        // The item vector is a temporary; the ids outlive it.
        let rendered: Vec<&str> = props.items().iter().map(|item| item.id().as_str()).collect();
        assert_eq!(rendered, vec!["oak", "walnut"]);
    }
}
