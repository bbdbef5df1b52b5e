//! Finishes: the selectable surface options (stains, paints, metals)
//!
//! Ids are stable slugs; labels are display text.

use std::borrow::Borrow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StairsError};

/// Slug pattern for finish ids loaded from config
static FINISH_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").expect("invalid finish id regex")
});

/// Identifier of a finish, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinishId(String);

impl FinishId {
    /// Wrap an id without validation.
    ///
    /// Ids coming from the 3D configurator are taken as-is; use
    /// [`FinishId::parse`] for ids an operator typed into config.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Validate slug format and wrap.
    ///
    /// # Example
    /// ```
    /// use stairworks_core::FinishId;
    ///
    /// assert!(FinishId::parse("smoked-oak").is_ok());
    /// assert!(FinishId::parse("Smoked Oak").is_err());
    /// ```
    pub fn parse(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(StairsError::invalid_finish_id(id, "cannot be empty"));
        }
        if !FINISH_ID_RE.is_match(id) {
            return Err(StairsError::invalid_finish_id(
                id,
                "must be lowercase alphanumeric with hyphens/underscores, at most 64 characters",
            ));
        }
        Ok(Self(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FinishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FinishId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by FinishId be queried with a plain &str.
impl Borrow<str> for FinishId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FinishId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for FinishId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FinishId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A selectable finish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finish {
    pub id: FinishId,
    pub label: String,
}

impl Finish {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: FinishId::new(id),
            label: label.into(),
        }
    }
}
