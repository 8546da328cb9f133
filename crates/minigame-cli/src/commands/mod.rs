//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod init;
pub mod play;
pub mod reconcile;
pub mod rules;
pub mod score;
pub mod settings;
pub mod sync;
