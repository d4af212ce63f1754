pub mod batch;
pub mod processor;

pub use crate::domain::model::{FormattedPerson, ProcessStage, RawPerson};
pub use crate::domain::ports::PersonStore;
pub use crate::utils::error::Result;
