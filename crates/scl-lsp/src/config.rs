//! Server configuration from LSP initialization options.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use scl_hir::CheckOptions;

fn default_max_name_len() -> usize {
    24
}

fn default_true() -> bool {
    true
}

/// Client-supplied configuration, all fields optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SclConfig {
    /// Maximum significant symbol name length.
    #[serde(default = "default_max_name_len")]
    pub max_name_length: usize,
    /// Report assignments to undeclared variables.
    #[serde(default = "default_true")]
    pub check_undefined_variables: bool,
    /// Report unterminated statements.
    #[serde(default = "default_true")]
    pub check_statement_termination: bool,
    /// Report unbalanced or malformed conditional blocks.
    #[serde(default = "default_true")]
    pub check_conditionals: bool,
    /// Report overlong and colliding names.
    #[serde(default = "default_true")]
    pub check_naming: bool,
}

impl Default for SclConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_len(),
            check_undefined_variables: true,
            check_statement_termination: true,
            check_conditionals: true,
            check_naming: true,
        }
    }
}

impl SclConfig {
    /// Parses initialization options, falling back to defaults when the
    /// client sends nothing or something malformed.
    pub fn from_initialization_options(options: Option<Value>) -> Self {
        let Some(value) = options else {
            return Self::default();
        };
        match serde_json::from_value(value) {
            Ok(config) => config,
            Err(err) => {
                warn!("Malformed initialization options, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Translates the configuration into rule engine options.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            max_name_len: self.max_name_length,
            undefined_variables: self.check_undefined_variables,
            statement_termination: self.check_statement_termination,
            conditional_balance: self.check_conditionals,
            naming: self.check_naming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_options_use_defaults() {
        let config = SclConfig::from_initialization_options(None);
        assert_eq!(config.max_name_length, 24);
        assert!(config.check_undefined_variables);
    }

    #[test]
    fn partial_options_fill_in_defaults() {
        let config = SclConfig::from_initialization_options(Some(json!({
            "maxNameLength": 32,
            "checkNaming": false,
        })));
        assert_eq!(config.max_name_length, 32);
        assert!(!config.check_naming);
        assert!(config.check_statement_termination);
    }

    #[test]
    fn malformed_options_fall_back_to_defaults() {
        let config =
            SclConfig::from_initialization_options(Some(json!({ "maxNameLength": "wide" })));
        assert_eq!(config.max_name_length, 24);
    }

    #[test]
    fn options_map_onto_the_rule_engine() {
        let config = SclConfig::from_initialization_options(Some(json!({
            "checkUndefinedVariables": false,
        })));
        let options = config.check_options();
        assert!(!options.undefined_variables);
        assert!(options.conditional_balance);
        assert_eq!(options.max_name_len, 24);
    }
}
