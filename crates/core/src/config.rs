//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (mask width, tracing).
//! 2. **Structures:** Hierarchical config for general and machine settings.
//!
//! Configuration is supplied via JSON (see [`Config::from_json`]) or use
//! `Config::default()` for the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline behavior when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Width of a textual mask in characters (one per bit).
    ///
    /// The write model operates on 36-bit values: every mask must be exactly
    /// this long, and every stored value fits below `2^36`.
    pub const MASK_WIDTH: u32 = 36;
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine settings (mask width).
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// Missing fields fall back to their defaults, so a partial document such
    /// as `{"general": {"trace_writes": true}}` is valid.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the text is not valid
    /// JSON or a field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            machine: MachineConfig::default(),
        }
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Echo every store to stderr (address, stored value, raw value).
    #[serde(default)]
    pub trace_writes: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_writes: false,
        }
    }
}

/// Machine settings.
///
/// The mask width bounds both the textual masks and the stored values.
/// Widths above 64 are not representable by the `u64` mask pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Textual mask width in characters
    #[serde(default = "MachineConfig::default_mask_width")]
    pub mask_width: u32,
}

impl MachineConfig {
    /// Returns the default textual mask width.
    fn default_mask_width() -> u32 {
        defaults::MASK_WIDTH
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            mask_width: defaults::MASK_WIDTH,
        }
    }
}
