use crate::domain::model::ProcessStage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Persistence { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PersonError {
    pub fn validation(message: impl Into<String>) -> Self {
        PersonError::Validation {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        PersonError::Persistence {
            message: message.into(),
        }
    }

    /// 產生錯誤的管線階段；設定與 IO 錯誤不屬於任何階段
    pub fn stage(&self) -> Option<ProcessStage> {
        match self {
            PersonError::Validation { .. } => Some(ProcessStage::Validate),
            PersonError::Persistence { .. }
            | PersonError::Serialization(_)
            | PersonError::Storage { .. } => Some(ProcessStage::Save),
            PersonError::Config { .. } | PersonError::Io(_) => None,
        }
    }

    /// Failures the caller can fix by correcting the input record.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PersonError::Validation { .. } | PersonError::Persistence { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PersonError::Validation { .. } => "Provide both a name and a cpf",
            PersonError::Persistence { .. } => {
                "Make sure the name has at least two words and the cpf contains digits"
            }
            PersonError::Serialization(_) | PersonError::Storage { .. } => {
                "Check the storage backend and retry"
            }
            PersonError::Config { .. } => "Check the TOML file and the command line arguments",
            PersonError::Io(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PersonError>;
