//! Build script for deckhand-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates deckhand.toml and embeds it as a postcard image

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use deckhand_core::config::ControllerConfig;

/// Name of the encoded config inside OUT_DIR
const CONFIG_IMAGE: &str = "deckhand.postcard";

fn main() {
    setup_linker();
    encode_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Validate deckhand.toml and write the binary image the firmware embeds
fn encode_config() {
    println!("cargo:rerun-if-changed=deckhand.toml");

    let config_path = Path::new("deckhand.toml");

    let config = if config_path.exists() {
        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => fail("Failed to read deckhand.toml", &[e.to_string()]),
        };
        match toml::from_str::<ControllerConfig>(&content) {
            Ok(config) => config,
            Err(e) => fail(
                "Invalid deckhand.toml",
                &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
            ),
        }
    } else {
        println!("cargo:warning=deckhand.toml not found, using built-in defaults");
        ControllerConfig::default()
    };

    if let Err(e) = config.validate() {
        fail(
            "Invalid controller configuration in deckhand.toml",
            &[format!("{:?}", e)],
        );
    }

    let image = postcard::to_allocvec(&config).unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join(CONFIG_IMAGE), image).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[String]) -> ! {
    let body = details
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
