//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line host around the search engine:
//! solving single positions, playing games and exporting policies.

pub mod commands;
pub mod config;
pub mod output;
