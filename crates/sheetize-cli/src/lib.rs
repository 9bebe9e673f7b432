//! Sheetize CLI library.
//!
//! This crate provides the pieces behind the `sheetize` binary: request
//! loading, the file-backed export collaborators, and the command
//! implementations.

pub mod collaborators;
pub mod commands;
pub mod input;
pub mod logging;
