//! Board configuration loading
//!
//! The configuration is compiled in from `board.toml` (validated by
//! build.rs) and parsed once at boot.

use defmt::*;

use axial_core::config::{parse_config, BoardConfig};

/// Embedded board configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Parse the embedded configuration
///
/// build.rs already rejects a malformed file, so failure here means the
/// two validators disagree; fall back to the built-in defaults.
pub fn load() -> BoardConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            BoardConfig::default()
        }
    }
}
