//! Records facts about the toolchain that only the build knows.
//!
//! - `GREETER_RUSTC_VERSION`: version reported by `rustc --version`
//! - `GREETER_TARGET_VENDOR`: vendor part of the target triple

use std::env;
use std::process::Command;

fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    // "rustc 1.79.0 (129f3b996 2024-06-10)"
    stdout.split_whitespace().nth(1).map(str::to_string)
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    if let Some(version) = rustc_version() {
        println!("cargo:rustc-env=GREETER_RUSTC_VERSION={version}");
    }
    if let Ok(vendor) = env::var("CARGO_CFG_TARGET_VENDOR") {
        println!("cargo:rustc-env=GREETER_TARGET_VENDOR={vendor}");
    }
}
