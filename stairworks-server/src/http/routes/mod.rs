//! Route handlers organized by page

pub mod assets;
pub mod configurator;
pub mod health;
pub mod pages;
