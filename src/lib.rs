//! GPS Atlas: run configuration for GPS serial readers.
//!
//! A library that turns command-line switches and an optional config file
//! into one validated, read-only run configuration, or rejects them with a
//! precise reason before any device I/O happens.

pub mod config;
