//! Finish catalog, color fallbacks and the configurator's model library
//!
//! Built once at startup (from config or the defaults below) and shared
//! read-only by every request.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, StairsError};
use crate::finish::{Finish, FinishId};
use crate::model::{ActiveModel, ColorHexTable};

/// Colors accepted for a finish: #rgb, #rgba, #rrggbb, #rrggbbaa or a bare color name
static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]{3,32})$")
        .expect("invalid color regex")
});

/// A `[[finishes]]` entry in config: the finish plus its optional solid color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishEntry {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    finishes: Vec<Finish>,
    color_hex: ColorHexTable,
    models: Vec<ActiveModel>,
}

impl Catalog {
    /// Build a catalog from config entries.
    ///
    /// Rejects malformed or duplicate finish ids, colors that are not a hex
    /// code or color name, and duplicate model names.
    /// Model variants naming a finish outside the catalog are kept (they are
    /// never rendered) but logged.
    pub fn from_entries(entries: &[FinishEntry], models: Vec<ActiveModel>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut finishes = Vec::with_capacity(entries.len());
        let mut color_hex = ColorHexTable::new();

        for entry in entries {
            let id = FinishId::parse(&entry.id)?;
            if !seen.insert(id.clone()) {
                return Err(StairsError::duplicate_finish(entry.id.as_str()));
            }
            if let Some(hex) = &entry.hex {
                if !COLOR_RE.is_match(hex) {
                    return Err(StairsError::invalid_color(entry.id.as_str(), hex.as_str()));
                }
                color_hex.insert(id.as_str(), hex.as_str());
            }
            finishes.push(Finish {
                id,
                label: entry.label.clone(),
            });
        }

        let mut names = HashSet::new();
        for model in &models {
            if !names.insert(model.name.as_str()) {
                return Err(StairsError::duplicate_model(model.name.as_str()));
            }
            for id in model.variants.keys() {
                if !seen.contains(id) {
                    warn!(model = %model.name, finish = %id, "model variant names a finish outside the catalog");
                }
            }
        }

        Ok(Self {
            finishes,
            color_hex,
            models,
        })
    }

    /// Catalog shipped with the site when config does not override it
    pub fn builtin() -> Self {
        let entries = default_finish_entries();
        let models = default_models();
        Self::from_entries(&entries, models).unwrap_or_default()
    }

    pub fn finishes(&self) -> &[Finish] {
        &self.finishes
    }

    pub fn color_hex(&self) -> &ColorHexTable {
        &self.color_hex
    }

    pub fn models(&self) -> &[ActiveModel] {
        &self.models
    }

    /// Look up a model by its name
    pub fn model(&self, name: &str) -> Option<&ActiveModel> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn finish(&self, id: &str) -> Option<&Finish> {
        self.finishes.iter().find(|finish| finish.id == id)
    }
}

pub fn default_finish_entries() -> Vec<FinishEntry> {
    [
        ("natural-oak", "Natural Oak", Some("#c8a165")),
        ("smoked-oak", "Smoked Oak", Some("#7a5c3e")),
        ("walnut", "Walnut", Some("#5b3a29")),
        ("white-ash", "White Ash", Some("#e8dcc8")),
        ("graphite", "Graphite", Some("#3a3d40")),
        ("raw-steel", "Raw Steel", None),
    ]
    .into_iter()
    .map(|(id, label, hex)| FinishEntry {
        id: id.to_string(),
        label: label.to_string(),
        hex: hex.map(str::to_string),
    })
    .collect()
}

pub fn default_models() -> Vec<ActiveModel> {
    let images = |model: &str, finish: &str| vec![format!("/assets/models/{model}/{finish}.webp")];

    vec![
        ActiveModel::new("straight", "Straight floating stair")
            .with_variant("natural-oak", images("straight", "natural-oak"))
            .with_variant("smoked-oak", images("straight", "smoked-oak"))
            .with_variant("walnut", images("straight", "walnut"))
            .with_variant("white-ash", images("straight", "white-ash")),
        ActiveModel::new("spiral", "Spiral stair")
            .with_variant("graphite", images("spiral", "graphite"))
            .with_variant("raw-steel", images("spiral", "raw-steel"))
            .with_variant("natural-oak", images("spiral", "natural-oak")),
        ActiveModel::new("l-shaped", "L-shaped stair with landing")
            .with_variant("natural-oak", images("l-shaped", "natural-oak"))
            .with_variant("walnut", images("l-shaped", "walnut"))
            .with_variant("graphite", images("l-shaped", "graphite")),
    ]
}
