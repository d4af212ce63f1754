use serde::{Deserialize, Serialize};
use std::fmt;

/// Untrusted input. A field that is absent and a field that is empty are
/// treated the same way by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
}

impl RawPerson {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cpf: Some(cpf.into()),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn cpf(&self) -> &str {
        self.cpf.as_deref().unwrap_or_default()
    }
}

/// Canonical record handed to storage. Field order matters for the JSON
/// snapshot embedded in persistence errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPerson {
    pub cpf: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl FormattedPerson {
    pub fn new(
        cpf: impl Into<String>,
        name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            last_name: last_name.into(),
        }
    }

    /// True when every field is non-empty.
    pub fn is_complete(&self) -> bool {
        [&self.cpf, &self.name, &self.last_name]
            .iter()
            .all(|field| !field.is_empty())
    }
}

/// Pipeline stage that can fail. `format` never fails, so it has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessStage {
    Validate,
    Save,
}

impl fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProcessStage::Validate => "validate",
            ProcessStage::Save => "save",
        };
        f.write_str(label)
    }
}
