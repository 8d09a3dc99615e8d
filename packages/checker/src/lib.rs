//! proxydial_checker
//!
//! Reads a proxy list, dials a probe target through every entry from a pool
//! of worker threads and writes the entries that produced a tunnel.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod checker;
pub mod cli;

pub use checker::{
    CheckSettings, Summary, check_all, parse_candidates, probe, render_valid, run, write_valid,
};
pub use cli::Args;
