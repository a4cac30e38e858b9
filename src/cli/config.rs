//! Shared configuration for CLI commands

use clap::Args;

use crate::search::{SearchConfig, ShortcutScope};

/// Flags common to every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Random seed for the opening move
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Where the immediate-win shortcut applies
    #[arg(long, global = true, value_enum, default_value_t = ShortcutScope::RootOnly)]
    pub shortcut: ShortcutScope,

    /// Log search statistics (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::new().with_shortcut_scope(self.shortcut);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "noughts=debug" } else { "warn" }
    }
}
