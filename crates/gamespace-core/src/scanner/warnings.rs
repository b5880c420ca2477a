/// Thread-safe collector for non-fatal scan warnings.
///
/// Scan tasks run on a rayon pool and may all append at once; the list is
/// only read after every task has joined.
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct WarningCollector {
    messages: Mutex<Vec<String>>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one warning line.
    pub fn push(&self, message: impl Into<String>) {
        self.messages.lock().push(message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Consume the collector, returning warnings in the order they arrived.
    pub fn into_messages(self) -> Vec<String> {
        self.messages.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_concurrent_pushes_are_not_lost() {
        let collector = WarningCollector::new();
        (0..1_000).into_par_iter().for_each(|i| {
            collector.push(format!("warning {i}"));
        });
        assert_eq!(collector.len(), 1_000);

        let mut messages = collector.into_messages();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), 1_000);
    }

    #[test]
    fn test_empty_collector() {
        let collector = WarningCollector::new();
        assert!(collector.is_empty());
        assert!(collector.into_messages().is_empty());
    }
}
