use crate::adapters::storage::NoopStore;
use crate::core::{FormattedPerson, PersonStore, RawPerson, Result};
use crate::utils::error::PersonError;
use crate::utils::validation::require_present;

/// Runs raw person records through validate, format and save.
///
/// The processor holds no state of its own; everything it writes goes
/// through the store.
#[derive(Debug, Clone, Default)]
pub struct PersonProcessor<S: PersonStore = NoopStore> {
    store: S,
}

impl PersonProcessor<NoopStore> {
    pub fn noop() -> Self {
        Self { store: NoopStore }
    }
}

impl<S: PersonStore> PersonProcessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn validate(&self, person: &RawPerson) -> Result<()> {
        validate(person)
    }

    pub fn format(&self, person: &RawPerson) -> FormattedPerson {
        format(person)
    }

    /// Rejects incomplete records before the store sees them.
    pub fn save(&self, person: &FormattedPerson) -> Result<bool> {
        if !person.is_complete() {
            let snapshot = serde_json::to_string(person)?;
            return Err(PersonError::persistence(format!(
                "cannot save invalid person {}",
                snapshot
            )));
        }

        self.store.persist(person)?;
        tracing::debug!("saved person {} {}", person.name, person.last_name);
        Ok(true)
    }

    pub fn process(&self, person: &RawPerson) -> Result<bool> {
        self.validate(person)?;
        tracing::debug!("validated person");

        let formatted = self.format(person);
        tracing::debug!("formatted person as {:?}", formatted);

        self.save(&formatted)
    }
}

/// Name first, then cpf. A record missing both reports the name.
pub fn validate(person: &RawPerson) -> Result<()> {
    require_present(person.name.as_deref(), "name is required")?;
    require_present(person.cpf.as_deref(), "cpf is required")?;
    Ok(())
}

/// Splits the name on single spaces. Leading or repeated spaces yield empty
/// tokens, so such names fail later at `save` rather than here.
pub fn format(person: &RawPerson) -> FormattedPerson {
    let mut tokens = person.name().split(' ');
    let name = tokens.next().unwrap_or_default().to_string();
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    let cpf = person
        .cpf()
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();

    FormattedPerson {
        cpf,
        name,
        last_name,
    }
}

pub fn save(person: &FormattedPerson) -> Result<bool> {
    PersonProcessor::noop().save(person)
}

pub fn process(person: &RawPerson) -> Result<bool> {
    PersonProcessor::noop().process(person)
}
