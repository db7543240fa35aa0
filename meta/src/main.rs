//! # meta
//!
//! Project automation written in Rust.
//!
//! ## Usage
//!
//! - Create a starter `metafile.rs`: `meta init`
//! - Install the declared tools: `meta setup`
//! - Run a task: `meta test`, `meta task build --release`
//! - Run an installed tool: `meta tool cargo-nextest run`, `meta use rg TODO`

/// Entry point for the CLI tool.
fn main() {
    meta::cli::run_cli();
}
