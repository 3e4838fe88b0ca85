//! Startup configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use atrium_types::error::Result;
use serde::Deserialize;

/// Host configuration (`desk.toml`). Every field has a default so a missing
/// or partial file still boots.
#[derive(Debug, Clone, Deserialize)]
pub struct DeskConfig {
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    /// Simulated generation latency in host ticks.
    #[serde(default = "default_generation_delay")]
    pub generation_delay_ticks: u64,
}

fn default_title() -> String {
    "ATRIUM DESK".to_string()
}
fn default_canvas_width() -> u32 {
    1280
}
fn default_canvas_height() -> u32 {
    720
}
fn default_store_dir() -> PathBuf {
    PathBuf::from("atrium-state")
}
fn default_generation_delay() -> u64 {
    2
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            store_dir: default_store_dir(),
            generation_delay_ticks: default_generation_delay(),
        }
    }
}

impl DeskConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a file; an absent file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            },
            Err(err) => Err(err.into()),
        }
    }
}
