//! Controller configuration
//!
//! `build.rs` validates deckhand.toml and encodes it with postcard; this
//! module decodes that image at boot.

use defmt::*;

use deckhand_core::config::ControllerConfig;

/// Configuration encoded at build time
static CONFIG_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/deckhand.postcard"));

/// Load the embedded configuration
///
/// Falls back to the built-in defaults if the image does not decode or
/// fails validation, which only happens when the core types changed
/// without a rebuild of the image.
pub fn load() -> ControllerConfig {
    match postcard::from_bytes::<ControllerConfig>(CONFIG_IMAGE) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                info!("Loaded configuration ({} bytes)", CONFIG_IMAGE.len());
                config
            }
            Err(e) => {
                warn!("Embedded configuration invalid: {}, using defaults", e);
                ControllerConfig::default()
            }
        },
        Err(_) => {
            warn!("Embedded configuration unreadable, using defaults");
            ControllerConfig::default()
        }
    }
}
