//! stairworks-core: domain model and content for the stairworks site
//!
//! - `finish` / `model`: the finish catalog, 3D model variants and color fallbacks
//! - `swatch`: the swatch selector projection used by the configurator
//! - `faq` / `site`: static page content and layout metadata
//! - `config`: TOML site configuration with built-in defaults

pub mod catalog;
pub mod config;
pub mod error;
pub mod faq;
pub mod finish;
pub mod model;
pub mod site;
pub mod swatch;

pub use catalog::{Catalog, FinishEntry};
pub use config::{ServerSettings, SiteConfig};
pub use error::{Result, StairsError};
pub use faq::FaqEntry;
pub use finish::{Finish, FinishId};
pub use model::{ActiveModel, ColorHexTable};
pub use site::{FontSpec, NavLink, SiteMeta};
pub use swatch::{resolve_fill, SwatchFill, SwatchItem, SwatchProps, SwatchSelector};
