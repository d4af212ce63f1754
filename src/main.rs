use anyhow::Context;
use clap::Parser;
use person_etl::utils::{logger, validation::Validate};
use person_etl::{CliConfig, InMemoryStore, PersonProcessor};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting person-etl");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let people = config
        .resolve_people()
        .with_context(|| format!("failed to load people from {:?}", config.config))?;

    tracing::info!(
        "📁 Batch '{}': {} record(s)",
        people.batch_name(),
        people.people.len()
    );

    let store = InMemoryStore::new();
    let processor = PersonProcessor::new(&store);
    let report = processor.process_batch(&people.people, people.stop_on_error());

    for saved in store.records() {
        println!("✅ {} {} ({})", saved.name, saved.last_name, saved.cpf);
    }

    for (index, e) in &report.failures {
        let stage = e
            .stage()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "input".to_string());
        tracing::error!("❌ Record {} failed at {}: {}", index, stage, e);
        eprintln!("❌ Record {}: {}", index, e);
        eprintln!("💡 {}", e.recovery_suggestion());
    }

    tracing::info!(
        "Processed {} record(s), {} failure(s)",
        report.processed,
        report.failures.len()
    );

    if report.stopped_early {
        tracing::warn!("Batch stopped at the first failure");
    }

    if !report.is_success() {
        std::process::exit(2);
    }

    Ok(())
}
