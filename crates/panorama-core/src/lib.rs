pub mod config;
pub mod error;
pub mod scroll;

pub use config::{AppConfig, KeymapConfig, ScrollConfig, SectionConfig, ThemeMode};
pub use error::{Error, Result};
