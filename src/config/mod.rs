pub mod toml_config;

use crate::adapters::storage::STDIO_PATH;
use crate::core::{ConfigProvider, HandleMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const LOG_FORMATS: &[&str] = &["compact", "json"];
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "enterprise-adapter"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Pass enterprise requests through the adapter handler")
)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, help = "Input file, '-' for stdin [default: -]"))]
    pub input: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Output file, '-' for stdout [default: -]"))]
    pub output: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Request framing: whole or lines [default: whole]"))]
    pub mode: Option<HandleMode>,

    #[cfg_attr(feature = "cli", arg(long, help = "Path to a TOML config file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Log format: compact or json [default: compact]"))]
    pub log_format: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(skip))]
    #[serde(skip)]
    pub log_level: Option<String>,
}

impl CliConfig {
    /// 以 TOML 設定補上命令列未指定的欄位，命令列明確給的值優先
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if let Some(io) = &toml.io {
            if self.input.is_none() {
                self.input = io.input_path.clone();
            }
            if self.output.is_none() {
                self.output = io.output_path.clone();
            }
            if self.mode.is_none() {
                self.mode = io.mode;
            }
        }

        if let Some(logging) = &toml.logging {
            if self.log_format.is_none() {
                self.log_format = logging.format.clone();
            }
            if self.log_level.is_none() {
                self.log_level = logging.level.clone();
            }
        }
    }

    /// Loads the `--config` file, if any, and merges it in.
    pub fn load_and_merge(&mut self) -> Result<Option<TomlConfig>> {
        let Some(path) = self.config.clone() else {
            return Ok(None);
        };
        let toml = TomlConfig::from_file(&path)?;
        self.merge_toml(&toml);
        Ok(Some(toml))
    }

    pub fn log_format(&self) -> &str {
        self.log_format.as_deref().unwrap_or("compact")
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(STDIO_PATH)
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(STDIO_PATH)
    }

    fn mode(&self) -> HandleMode {
        self.mode.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", self.input_path())?;
        validate_path("output", self.output_path())?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        validate_one_of("log_format", self.log_format(), LOG_FORMATS)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_with_io() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[adapter]
name = "enterprise"

[io]
input_path = "requests.txt"
output_path = "responses.txt"
mode = "lines"

[logging]
format = "json"
level = "debug"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_use_stdio() {
        let config = CliConfig::default();
        assert_eq!(config.input_path(), "-");
        assert_eq!(config.output_path(), "-");
        assert_eq!(config.mode(), HandleMode::Whole);
        assert_eq!(config.log_format(), "compact");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_fills_unset_fields() {
        let mut config = CliConfig::default();
        config.merge_toml(&toml_with_io());

        assert_eq!(config.input_path(), "requests.txt");
        assert_eq!(config.output_path(), "responses.txt");
        assert_eq!(config.mode(), HandleMode::Lines);
        assert_eq!(config.log_format(), "json");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_explicit_cli_values_win() {
        let mut config = CliConfig {
            input: Some("override.txt".to_string()),
            mode: Some(HandleMode::Whole),
            ..Default::default()
        };
        config.merge_toml(&toml_with_io());

        assert_eq!(config.input_path(), "override.txt");
        assert_eq!(config.output_path(), "responses.txt");
        assert_eq!(config.mode(), HandleMode::Whole);
    }

    #[test]
    fn test_validation_rejects_unknown_log_format() {
        let config = CliConfig {
            log_format: Some("xml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_flags() {
        use clap::Parser;

        let config = CliConfig::parse_from([
            "enterprise-adapter",
            "--input",
            "in.txt",
            "--mode",
            "lines",
            "--verbose",
        ]);
        assert_eq!(config.input_path(), "in.txt");
        assert_eq!(config.output_path(), "-");
        assert_eq!(config.mode(), HandleMode::Lines);
        assert!(config.verbose);
    }
}
