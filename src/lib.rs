//! Core library for the `hitit` CLI.
//!
//! `hitit` fires `rate * seconds` GET requests at one URL, each starting at
//! a random point inside the run window, and reports latency statistics
//! over the successful responses. The crate exposes the pieces the binary
//! is built from: argument and config handling, the request driver, the
//! statistics engine, and report output.
pub mod args;
pub mod config;
pub mod driver;
pub mod entry;
pub mod error;
pub mod http;
pub mod report;
pub mod stats;

mod logger;
mod shutdown;
