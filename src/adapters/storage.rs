use crate::domain::model::FormattedPerson;
use crate::domain::ports::PersonStore;
use crate::utils::error::{PersonError, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Accepts every record without writing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl PersonStore for NoopStore {
    fn persist(&self, person: &FormattedPerson) -> Result<()> {
        tracing::debug!("noop store accepted person {}", person.name);
        Ok(())
    }
}

/// Keeps saved records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<FormattedPerson>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the saved records. A poisoned lock still yields the data
    /// pushed before the panic.
    pub fn records(&self) -> Vec<FormattedPerson> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FormattedPerson>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersonStore for InMemoryStore {
    fn persist(&self, person: &FormattedPerson) -> Result<()> {
        let mut records = self.records.lock().map_err(|e| PersonError::Storage {
            message: format!("store lock poisoned: {}", e),
        })?;
        records.push(person.clone());
        Ok(())
    }
}
