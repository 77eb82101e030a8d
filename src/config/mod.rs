//! Configuration management for ytlens.

mod settings;

pub use settings::{GeneralSettings, Settings, YoutubeSettings};
