//! Build script for parklot-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Passes the linker scripts for cortex-m-rt, embassy-rp and defmt

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    setup_linker();
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");
    println!("cargo:rerun-if-env-changed=PARKLOT_SLOT_COUNT");
    println!("cargo:rerun-if-env-changed=PARKLOT_ACCESSIBLE_MASK");
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
