//! 3D model descriptors and solid-color fallbacks
//!
//! The configurator engine owns these; the site only reads them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::finish::FinishId;

/// The model currently shown in the 3D configurator.
///
/// `variants` maps a finish id to its ordered preview images. A finish the
/// model cannot be previewed in is simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveModel {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub variants: HashMap<FinishId, Vec<String>>,
}

impl ActiveModel {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            variants: HashMap::new(),
        }
    }

    /// Builder-style helper for declaring a finish's preview images
    pub fn with_variant<I, S>(mut self, id: impl Into<String>, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.insert(
            FinishId::new(id),
            images.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Preview images for a finish, if the model declares any entry for it.
    ///
    /// An entry may exist and still be empty.
    pub fn variants_for(&self, id: &str) -> Option<&[String]> {
        self.variants.get(id).map(Vec::as_slice)
    }

    /// True if the model has at least one preview image for the finish
    pub fn supports(&self, id: &str) -> bool {
        self.variants_for(id).is_some_and(|images| !images.is_empty())
    }
}

/// Finish id → solid color used when a finish has no preview image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorHexTable(HashMap<FinishId, String>);

impl ColorHexTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, color: impl Into<String>) {
        self.0.insert(FinishId::new(id), color.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ColorHexTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (FinishId::new(k), v.into()))
                .collect(),
        )
    }
}
