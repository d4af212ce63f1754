use crate::utils::error::{PersonError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Presence check used by the pipeline: `None` and `""` are both missing.
/// Whitespace-only values count as present.
pub fn require_present(value: Option<&str>, message: &str) -> Result<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(PersonError::validation(message)),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PersonError::Config {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_len<T>(field_name: &str, items: &[T], min: usize) -> Result<()> {
    if items.len() < min {
        return Err(PersonError::Config {
            field: field_name.to_string(),
            message: format!("Expected at least {} entries, found {}", min, items.len()),
        });
    }
    Ok(())
}
