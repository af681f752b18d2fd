//! Client-side storefront for the TALWAR perfume house: hash-routed pages,
//! a catalog search overlay with optional voice input, and a persisted theme.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pages;
pub mod platform;

pub use app::App;
pub use config::SiteConfig;
