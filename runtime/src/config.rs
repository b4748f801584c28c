//! REPL configuration, read from the environment.

use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "lispy> ";

/// Overrides the history file location; an empty value disables history
pub const HISTORY_ENV: &str = "BILISP_HISTORY";

/// `1` or `true` starts the REPL with syntax tree dumps enabled
pub const SHOW_AST_ENV: &str = "BILISP_SHOW_AST";

const HISTORY_FILE: &str = ".bilisp_history";

#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_path: Option<PathBuf>,
    pub show_ast: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            history_path: dirs::home_dir().map(|home| home.join(HISTORY_FILE)),
            show_ast: false,
        }
    }
}

impl ReplConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ReplConfig::default();

        if let Some(path) = lookup(HISTORY_ENV) {
            config.history_path = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(flag) = lookup(SHOW_AST_ENV) {
            config.show_ast = matches!(flag.trim(), "1" | "true");
        }

        config
    }
}
