//! Data models shared across the form16 crates.

pub mod config;
