//! Database location.

use serde::{Deserialize, Serialize};

/// Value of `path` that selects a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    "superlists.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_database() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "superlists.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn recognizes_in_memory_path() {
        let config = DatabaseConfig {
            path: IN_MEMORY.into(),
        };
        assert!(config.is_in_memory());
    }
}
