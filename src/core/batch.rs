use crate::core::processor::PersonProcessor;
use crate::core::{PersonStore, RawPerson};
use crate::utils::error::PersonError;

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: usize,
    /// 失敗的紀錄索引與原始錯誤
    pub failures: Vec<(usize, PersonError)>,
    pub stopped_early: bool,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<S: PersonStore> PersonProcessor<S> {
    /// Processes each record in order. Errors are collected per record;
    /// with `stop_on_error` the batch ends at the first one.
    pub fn process_batch(&self, people: &[RawPerson], stop_on_error: bool) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, person) in people.iter().enumerate() {
            match self.process(person) {
                Ok(_) => report.processed += 1,
                Err(e) => {
                    tracing::debug!("record {} failed: {}", index, e);
                    report.failures.push((index, e));
                    if stop_on_error {
                        report.stopped_early = index + 1 < people.len();
                        break;
                    }
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;

    fn people() -> Vec<RawPerson> {
        vec![
            RawPerson::new("Tiago da Silva", "123.456.789-00"),
            RawPerson {
                name: Some("Ana Souza".to_string()),
                cpf: None,
            },
            RawPerson::new("Rui Lima", "987.654.321-00"),
        ]
    }

    #[test]
    fn test_batch_collects_failures() {
        let store = InMemoryStore::new();
        let processor = PersonProcessor::new(&store);

        let report = processor.process_batch(&people(), false);

        assert_eq!(report.processed, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, 1);
        assert_eq!(report.failures[0].1.to_string(), "cpf is required");
        assert!(!report.stopped_early);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_batch_stop_on_error() {
        let store = InMemoryStore::new();
        let processor = PersonProcessor::new(&store);

        let report = processor.process_batch(&people(), true);

        assert_eq!(report.processed, 1);
        assert!(report.stopped_early);
        assert!(!report.is_success());
        assert_eq!(store.records()[0].name, "Tiago");
    }

    #[test]
    fn test_empty_batch() {
        let report = PersonProcessor::noop().process_batch(&[], true);
        assert!(report.is_success());
        assert_eq!(report.processed, 0);
    }
}
