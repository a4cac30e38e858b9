//! Configuration for the search engine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where the immediate-win shortcut is applied.
///
/// Both settings compute the same values and pick the same moves; they differ
/// only in how many nodes are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutScope {
    /// Only the top-level move selection stops at the first winning move
    #[default]
    RootOnly,
    /// Every node stops expanding once the mover has a winning child
    EveryLevel,
}

/// Configuration for a [`Searcher`](super::Searcher).
///
/// # Examples
///
/// ```
/// use noughts::search::{SearchConfig, ShortcutScope};
///
/// let config = SearchConfig::new()
///     .with_seed(42)
///     .with_shortcut_scope(ShortcutScope::EveryLevel);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seed for the opening-move draw; `None` draws a fresh seed
    pub seed: Option<u64>,
    /// Where the immediate-win shortcut applies
    pub shortcut: ShortcutScope,
}

impl SearchConfig {
    /// Create a configuration with an unseeded opening and root-only shortcut.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for a reproducible opening move.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set where the immediate-win shortcut applies.
    pub fn with_shortcut_scope(mut self, shortcut: ShortcutScope) -> Self {
        self.shortcut = shortcut;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.shortcut, ShortcutScope::RootOnly);
    }

    #[test]
    fn test_serialized_form() {
        let config = SearchConfig::new().with_shortcut_scope(ShortcutScope::EveryLevel);
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["shortcut"], "every-level");
        assert!(json["seed"].is_null());
    }
}
