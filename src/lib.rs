pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::{InMemoryStore, NoopStore};
pub use config::toml_config::PeopleConfig;
pub use crate::core::batch::BatchReport;
pub use crate::core::processor::{format, process, save, validate, PersonProcessor};
pub use domain::model::{FormattedPerson, ProcessStage, RawPerson};
pub use domain::ports::PersonStore;
pub use utils::error::{PersonError, Result};
