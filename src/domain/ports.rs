use crate::domain::model::FormattedPerson;
use crate::utils::error::Result;

/// Durable destination for formatted person records.
///
/// Implementations only ever receive records that already passed the
/// structural check in `save`.
pub trait PersonStore: Send + Sync {
    fn persist(&self, person: &FormattedPerson) -> Result<()>;
}

impl<S: PersonStore + ?Sized> PersonStore for &S {
    fn persist(&self, person: &FormattedPerson) -> Result<()> {
        (**self).persist(person)
    }
}
