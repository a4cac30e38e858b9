//! Subcommands of the `noughts` binary

pub mod export;
pub mod play;
pub mod solve;
