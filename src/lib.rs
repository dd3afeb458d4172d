//! Case table generator application
//!
//! Configuration loading and export file writing for the `cubecase` binary.

pub mod config;
pub mod output;
