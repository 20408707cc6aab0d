//! # Diagnostic Sinks
//!
//! Destinations for failure messages under
//! [`ErrorPolicy::ReportAndSuppress`](crate::ErrorPolicy::ReportAndSuppress).
//! Each failure produces exactly one `report` call with the full
//! human-readable message line.

use parking_lot::Mutex;

/// Receives one message line per suppressed failure.
///
/// Implemented for any `Fn(&str) + Send + Sync` closure.
pub trait DiagnosticSink: Send + Sync {
    /// Record one failure message.
    fn report(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Emits each message as a `tracing` error event. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Writes each message as one line on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Keeps every reported message in memory, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return the messages reported so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.take(), vec!["first", "second"]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_memory_sink_collects_reports_from_threads() {
        let sink = std::sync::Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = std::sync::Arc::clone(&sink);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        sink.report(&format!("thread {t} line {i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let lines = sink.take();
        assert_eq!(lines.len(), 100);
        for t in 0..4 {
            let own: Vec<_> = lines
                .iter()
                .filter(|l| l.starts_with(&format!("thread {t} ")))
                .cloned()
                .collect();
            let expected: Vec<_> = (0..25).map(|i| format!("thread {t} line {i}")).collect();
            assert_eq!(own, expected);
        }
    }

    #[test]
    fn test_closure_is_a_sink() {
        let count = AtomicUsize::new(0);
        let sink = |message: &str| {
            assert_eq!(message, "Invalid number of arguments");
            count.fetch_add(1, Ordering::SeqCst);
        };
        sink.report("Invalid number of arguments");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sinks_are_object_safe() {
        let sinks: Vec<Box<dyn DiagnosticSink>> = vec![
            Box::new(TracingSink),
            Box::new(StderrSink),
            Box::new(MemorySink::new()),
        ];
        for sink in &sinks {
            sink.report("Test error");
        }
    }
}
