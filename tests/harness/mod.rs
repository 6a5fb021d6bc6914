//! Shared test harness
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

pub mod config;
pub mod server;
