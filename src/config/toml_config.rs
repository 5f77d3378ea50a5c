use crate::adapters::storage::STDIO_PATH;
use crate::config::{LOG_FORMATS, LOG_LEVELS};
use crate::core::{ConfigProvider, HandleMode};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub adapter: AdapterSection,
    pub io: Option<IoConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterSection {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IoConfig {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub mode: Option<HandleMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

// 找不到的變數保持原樣
fn substitute_in(value: &mut String) {
    if !value.contains("${") {
        return;
    }
    let replaced = env_var_pattern()
        .replace_all(value, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned();
    *value = replaced;
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdapterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).map_err(Self::parse_error)?;
        if !table.contains_key("adapter") {
            return Err(AdapterError::MissingConfigError {
                field: "adapter".to_string(),
            });
        }

        let mut config: Self = toml::from_str(content).map_err(Self::parse_error)?;
        config.substitute_env_vars();
        Ok(config)
    }

    fn parse_error(e: toml::de::Error) -> AdapterError {
        AdapterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }

    /// 解析後才替換字串欄位中的環境變數 (例如 ${INPUT_DIR})，值不會被當成 TOML 語法
    fn substitute_env_vars(&mut self) {
        substitute_in(&mut self.adapter.name);
        if let Some(io) = self.io.as_mut() {
            for value in [io.input_path.as_mut(), io.output_path.as_mut()].into_iter().flatten() {
                substitute_in(value);
            }
        }
        if let Some(logging) = self.logging.as_mut() {
            for value in [logging.level.as_mut(), logging.format.as_mut()].into_iter().flatten() {
                substitute_in(value);
            }
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("adapter.name", &self.adapter.name)?;

        if let Some(io) = &self.io {
            if let Some(input) = &io.input_path {
                validate_path("io.input_path", input)?;
            }
            if let Some(output) = &io.output_path {
                validate_path("io.output_path", output)?;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, LOG_FORMATS)?;
            }
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, LOG_LEVELS)?;
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.adapter.name
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.io
            .as_ref()
            .and_then(|io| io.input_path.as_deref())
            .unwrap_or(STDIO_PATH)
    }

    fn output_path(&self) -> &str {
        self.io
            .as_ref()
            .and_then(|io| io.output_path.as_deref())
            .unwrap_or(STDIO_PATH)
    }

    fn mode(&self) -> HandleMode {
        self.io.as_ref().and_then(|io| io.mode).unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[adapter]
name = "enterprise"
description = "Enterprise request adapter"
version = "0.1.0"

[io]
input_path = "in/requests.txt"
output_path = "out/responses.txt"
mode = "lines"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), "enterprise");
        assert_eq!(config.input_path(), "in/requests.txt");
        assert_eq!(config.output_path(), "out/responses.txt");
        assert_eq!(config.mode(), HandleMode::Lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_defaults_to_stdio() {
        let config = TomlConfig::from_toml_str("[adapter]\nname = \"x\"\n").unwrap();
        assert_eq!(config.input_path(), "-");
        assert_eq!(config.output_path(), "-");
        assert_eq!(config.mode(), HandleMode::Whole);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ENTERPRISE_ADAPTER_TEST_INPUT", "/data/in.txt");

        let toml_content = r#"
[adapter]
name = "test"

[io]
input_path = "${ENTERPRISE_ADAPTER_TEST_INPUT}"
output_path = "${ENTERPRISE_ADAPTER_TEST_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/data/in.txt");
        assert_eq!(config.output_path(), "${ENTERPRISE_ADAPTER_TEST_UNSET}");

        std::env::remove_var("ENTERPRISE_ADAPTER_TEST_INPUT");
    }

    #[test]
    fn test_env_values_are_not_read_as_toml_syntax() {
        std::env::set_var("ENTERPRISE_ADAPTER_TEST_WIN_DIR", r"C:\data\new");
        std::env::set_var("ENTERPRISE_ADAPTER_TEST_QUOTED", r#"out "final".txt"#);

        let toml_content = r#"
[adapter]
name = "test"

[io]
input_path = "${ENTERPRISE_ADAPTER_TEST_WIN_DIR}\\requests.txt"
output_path = "${ENTERPRISE_ADAPTER_TEST_QUOTED}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), r"C:\data\new\requests.txt");
        assert_eq!(config.output_path(), r#"out "final".txt"#);

        std::env::remove_var("ENTERPRISE_ADAPTER_TEST_WIN_DIR");
        std::env::remove_var("ENTERPRISE_ADAPTER_TEST_QUOTED");
    }

    #[test]
    fn test_missing_adapter_section() {
        let err = TomlConfig::from_toml_str("[io]\ninput_path = \"in.txt\"\n").unwrap_err();
        assert!(matches!(
            err,
            AdapterError::MissingConfigError { ref field } if field == "adapter"
        ));
    }

    #[test]
    fn test_config_validation() {
        let blank_name = TomlConfig::from_toml_str("[adapter]\nname = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());

        let bad_format = TomlConfig::from_toml_str(
            "[adapter]\nname = \"x\"\n\n[logging]\nformat = \"yaml\"\n",
        )
        .unwrap();
        assert!(bad_format.validate().is_err());

        let bad_mode = TomlConfig::from_toml_str("[adapter]\nname = \"x\"\n\n[io]\nmode = \"csv\"\n");
        assert!(matches!(
            bad_mode,
            Err(AdapterError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[adapter]
name = "file-test"

[logging]
level = "warn"
format = "json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), "file-test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/enterprise-adapter.toml").unwrap_err();
        assert!(matches!(err, AdapterError::IoError(_)));
    }
}
