use super::toml_config::{BatchConfig, PeopleConfig};
use crate::domain::model::RawPerson;
use crate::utils::error::{PersonError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

pub const SAMPLE_NAME: &str = "Tiago da Silva";
pub const SAMPLE_CPF: &str = "123.456.789-00";

#[derive(Debug, Clone, Parser)]
#[command(name = "person-etl")]
#[command(about = "Validate, format and save person records")]
pub struct CliConfig {
    /// Full name of a single person to process
    #[arg(long, conflicts_with = "config")]
    pub name: Option<String>,

    /// CPF of a single person to process
    #[arg(long, conflicts_with = "config")]
    pub cpf: Option<String>,

    /// Path to a TOML file listing `[[person]]` entries
    #[arg(short, long)]
    pub config: Option<String>,

    /// Stop the batch at the first failing record
    #[arg(long)]
    pub stop_on_error: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 依命令列參數決定要處理的紀錄；沒有任何輸入時使用範例資料
    pub fn resolve_people(&self) -> Result<PeopleConfig> {
        let mut people = match (&self.config, &self.name, &self.cpf) {
            (Some(path), _, _) => PeopleConfig::from_file(path)?,
            (None, None, None) => {
                tracing::info!("No input given, processing the sample person");
                PeopleConfig::single(RawPerson::new(SAMPLE_NAME, SAMPLE_CPF))
            }
            (None, name, cpf) => PeopleConfig::single(RawPerson {
                name: name.clone(),
                cpf: cpf.clone(),
            }),
        };

        if self.stop_on_error {
            people
                .batch
                .get_or_insert_with(BatchConfig::default)
                .stop_on_error = Some(true);
        }

        people.validate()?;
        Ok(people)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_non_empty_string("config", path)?;
            if path.contains('\0') {
                return Err(PersonError::Config {
                    field: "config".to_string(),
                    message: "Path contains null bytes".to_string(),
                });
            }
        }
        Ok(())
    }
}
