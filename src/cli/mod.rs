//! CLI infrastructure for the noughts engine tools
//!
//! This module provides the command-line interface for analyzing positions,
//! running engine-vs-engine games, and verifying the search strategies.

pub mod commands;
pub mod output;
