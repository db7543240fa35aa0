//! # meta
//!
//! Write your project's automation as a Rust program instead of shell scripts.
//! `meta` finds the nearest `metafile.rs`, builds it with Cargo and runs it
//! with your arguments; the program itself uses the `metafile` crate to
//! dispatch them to tools and tasks.

pub mod cli;
pub mod compile;
pub mod config;
pub mod delegate;
pub mod error;
pub mod scaffold;
