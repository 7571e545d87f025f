//! # Greeter
//!
//! Prints a greeting, the host properties and a calculation demo.
//!
//! Command line arguments are ignored. Log level is taken from `RUST_LOG`.

use std::io;
use std::process;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};

use greeter::HostProperties;

fn run() -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    greeter::greet(&HostProperties, stdin, &mut stdout).context("Greeting failed!")?;
    Ok(())
}

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

fn main() {
    logger_init();
    if let Err(err_msg) = run() {
        eprintln!("Error: {err_msg:#}");
        process::exit(1);
    }
}
