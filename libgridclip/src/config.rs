use config::{Config, FileFormat};
use derive_more::{Display, FromStr};
use enum_iterator::Sequence;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Host-local override file searched next to the working directory.
const CONFIG_FILE: &str = "gridclip.toml";

/// Policy controlling how decoded rows merge into the grid's existing
/// dataset.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, FromStr, PartialEq, Eq, Sequence, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PasteMode {
    /// Discard existing rows; decoded rows become the full dataset.
    Replace,
    /// Merge identity-matched rows in place, append the rest.
    Update,
    /// Append decoded rows without matching.
    #[default]
    Insert,
}

/// Read-only clipboard configuration supplied by the embedding host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub paste_mode: PasteMode,
    /// Default selector name used when a copy names none.
    pub selector: String,
    /// Default formatter name used when a copy names none.
    pub formatter: String,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            paste_mode: PasteMode::default(),
            selector: "active".to_string(),
            formatter: "table".to_string(),
        }
    }
}

impl ClipboardConfig {
    /// Loads configuration layered from the built-in defaults, an optional
    /// `gridclip.toml` in the working directory, and `GRIDCLIP_*`
    /// environment variables, most local source last.
    pub fn new() -> Result<Self> {
        let default_config = String::from(include_str!("../default_config.toml"));

        let config = Config::builder()
            .add_source(config::File::from_str(&default_config, FileFormat::Toml))
            .add_source(config::File::new(CONFIG_FILE, FileFormat::Toml).required(false))
            .add_source(config::Environment::with_prefix("gridclip"));

        config
            .build()?
            .try_deserialize()
            .context("Failed to parse clipboard configuration")
    }

    /// Parses configuration from a TOML string, applying defaults for
    /// omitted keys.
    pub fn new_from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse clipboard configuration")
    }
}
