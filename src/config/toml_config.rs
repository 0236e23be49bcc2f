use crate::config::GenerationSettings;
use crate::utils::error::{GenError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub classes: Option<ClassesConfig>,
    pub types: Option<TypesConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub file_name: Option<String>,
    pub include_guard: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassesConfig {
    pub include: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesConfig {
    pub text: Option<String>,
    pub integer: Option<String>,
    pub boolean: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GenError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_settings(self) -> GenerationSettings {
        let mut settings = GenerationSettings {
            output_path: self.output.path,
            ..GenerationSettings::default()
        };

        if let Some(file_name) = self.output.file_name {
            settings.file_name = file_name;
        }
        if let Some(guard) = self.output.include_guard {
            settings.include_guard = guard;
        }
        if let Some(include) = self.classes.and_then(|c| c.include) {
            settings.classes = include;
        }
        if let Some(types) = self.types {
            if let Some(text) = types.text {
                settings.types.text = text;
            }
            if let Some(integer) = types.integer {
                settings.types.integer = integer;
            }
            if let Some(boolean) = types.boolean {
                settings.types.boolean = boolean;
            }
        }
        if let Some(logging) = self.logging {
            settings.verbose = logging.verbose.unwrap_or(false);
            settings.json_logs = logging.json.unwrap_or(false);
        }

        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "./gen"
"#,
        )
        .unwrap();

        let settings = config.into_settings();
        assert_eq!(settings.output_path, "./gen");
        assert_eq!(settings.file_name, "GeneratedClasses.hpp");
        assert_eq!(settings.include_guard, "GENERATED_CLASSES_HPP");
        assert!(settings.classes.is_empty());
        assert_eq!(settings.types.integer, "int");
    }

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "./gen"
file_name = "models.hpp"
include_guard = "MODELS_HPP"

[classes]
include = ["Address"]

[types]
integer = "std::int32_t"

[logging]
verbose = true
json = true
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        let settings = config.into_settings();
        assert_eq!(settings.file_name, "models.hpp");
        assert_eq!(settings.include_guard, "MODELS_HPP");
        assert_eq!(settings.classes, vec!["Address"]);
        assert_eq!(settings.types.integer, "std::int32_t");
        assert_eq!(settings.types.text, "std::string");
        assert!(settings.verbose);
        assert!(settings.json_logs);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RECORD_GEN_TEST_OUT", "/tmp/record-gen-out");

        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "${RECORD_GEN_TEST_OUT}"
include_guard = "${RECORD_GEN_TEST_UNSET_GUARD}"
"#,
        )
        .unwrap();

        assert_eq!(config.output.path, "/tmp/record-gen-out");
        assert_eq!(
            config.output.include_guard.as_deref(),
            Some("${RECORD_GEN_TEST_UNSET_GUARD}")
        );

        std::env::remove_var("RECORD_GEN_TEST_OUT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "./gen"
include_guard = "NOT-AN-IDENTIFIER"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_escaping_file_name_is_rejected() {
        for file_name in ["/tmp/escape.hpp", "../../x.hpp"] {
            let config = TomlConfig::from_toml_str(&format!(
                "[output]\npath = \"./gen\"\nfile_name = \"{}\"\n",
                file_name
            ))
            .unwrap();
            assert!(config.validate().is_err(), "accepted {}", file_name);
        }
    }

    #[test]
    fn test_missing_output_table_is_rejected() {
        let err = TomlConfig::from_toml_str("[classes]\ninclude = []\n").unwrap_err();
        assert!(matches!(err, GenError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"./from-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.path, "./from-file");
    }
}
