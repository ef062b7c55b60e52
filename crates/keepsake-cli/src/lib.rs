//! Keepsake CLI library.
//!
//! This crate provides the command-line interface and interactive REPL
//! for Keepsake. The REPL host owns the gallery session; the core crates
//! stay free of mutable state.

pub mod cli;
pub mod commands;
pub mod render;
pub mod repl;
pub mod session;
