pub mod config;
pub mod document;
pub mod host;
#[cfg(feature = "render")]
pub mod render;
pub mod report;
pub mod theme;
