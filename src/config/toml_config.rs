use crate::domain::model::RawPerson;
use crate::utils::error::{PersonError, Result};
use crate::utils::validation::{validate_min_len, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeopleConfig {
    #[serde(default)]
    pub batch: Option<BatchConfig>,
    #[serde(default, rename = "person")]
    pub people: Vec<RawPerson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    pub name: Option<String>,
    pub stop_on_error: Option<bool>,
}

impl PeopleConfig {
    pub fn single(person: RawPerson) -> Self {
        Self {
            batch: None,
            people: vec![person],
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PersonError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PersonError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PERSON_CPF})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PersonError::Config {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn batch_name(&self) -> &str {
        self.batch
            .as_ref()
            .and_then(|b| b.name.as_deref())
            .unwrap_or("default")
    }

    pub fn stop_on_error(&self) -> bool {
        self.batch
            .as_ref()
            .and_then(|b| b.stop_on_error)
            .unwrap_or(false)
    }
}

impl Validate for PeopleConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.batch.as_ref().and_then(|b| b.name.as_deref()) {
            validate_non_empty_string("batch.name", name)?;
        }
        validate_min_len("person", &self.people, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_people_config() {
        let toml_content = r#"
[batch]
name = "sample"
stop_on_error = true

[[person]]
name = "Tiago da Silva"
cpf = "123.456.789-00"

[[person]]
name = "Ana Souza"
"#;

        let config = PeopleConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.batch_name(), "sample");
        assert!(config.stop_on_error());
        assert_eq!(config.people.len(), 2);
        assert_eq!(config.people[0].name(), "Tiago da Silva");
        assert_eq!(config.people[1].cpf, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PERSON_ETL_TEST_CPF", "111.222.333-44");

        let toml_content = r#"
[[person]]
name = "Rui Lima"
cpf = "${PERSON_ETL_TEST_CPF}"

[[person]]
name = "Ana Souza"
cpf = "${PERSON_ETL_UNSET_VAR}"
"#;

        let config = PeopleConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.people[0].cpf(), "111.222.333-44");
        assert_eq!(config.people[1].cpf(), "${PERSON_ETL_UNSET_VAR}");

        std::env::remove_var("PERSON_ETL_TEST_CPF");
    }

    #[test]
    fn test_config_validation() {
        let config = PeopleConfig::from_toml_str("[batch]\nname = \"empty\"\n").unwrap();
        assert!(config.validate().is_err());
        assert_eq!(config.batch_name(), "empty");
        assert!(!config.stop_on_error());

        let config =
            PeopleConfig::from_toml_str("[batch]\nname = \" \"\n[[person]]\nname = \"a b\"\n")
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = PeopleConfig::from_toml_str("[[person]\nname = ").unwrap_err();
        assert!(matches!(err, PersonError::Config { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[person]]\nname = \"Tiago da Silva\"\ncpf = \"123.456.789-00\"\n")
            .unwrap();

        let config = PeopleConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.batch_name(), "default");
        assert_eq!(config.people.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = PeopleConfig::from_file("/nonexistent/people.toml").unwrap_err();
        assert!(matches!(err, PersonError::Io(_)));
    }
}
