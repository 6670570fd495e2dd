//! Diagnostic logging for the CLI.
//!
//! Game output goes to the `out` stream; tracing output goes to stderr so
//! the two never interleave in redirected transcripts.

/// Filter used when `RUST_LOG` is unset and `--verbose` is not given.
pub const DEFAULT_FILTER: &str = "warn";
/// Filter used for `--verbose`.
pub const VERBOSE_FILTER: &str = "warn,blackjack_engine=debug,blackjack_cli=debug";

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between
/// [`DEFAULT_FILTER`] and [`VERBOSE_FILTER`]. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex, PoisonError};
    use tracing::{Level, debug, info, warn};
    use tracing_subscriber::Layer;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    #[derive(Debug, Clone)]
    struct LogEntry {
        level: Level,
        target: String,
        message: String,
        fields: Vec<(String, String)>,
    }

    /// Collects events in memory, for asserting on what the engine logged.
    #[derive(Clone, Default)]
    struct CaptureLog {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl CaptureLog {
        fn entries(&self) -> Vec<LogEntry> {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn messages(&self) -> Vec<String> {
            self.entries().into_iter().map(|e| e.message).collect()
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLog {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);

            let entry = LogEntry {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            };
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(entry);
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value_str = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value_str);
            } else {
                self.fields.push((field.name().to_string(), value_str));
            }
        }
    }

    #[test]
    fn capture_layer_records_message_and_fields() {
        let log = CaptureLog::default();
        let registry = Registry::default().with(log.clone());

        tracing::subscriber::with_default(registry, || {
            info!(bet = 100, "round dealt");
            warn!("round abandoned");
            debug!(hand = 1, "move accepted");
        });

        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, Level::INFO);
        assert_eq!(entries[0].message, "round dealt");
        let bet = ("bet".to_string(), "100".to_string());
        assert_eq!(entries[0].fields, vec![bet]);
        assert_eq!(entries[1].level, Level::WARN);
        assert_eq!(log.messages()[2], "move accepted");
    }

    #[test]
    fn engine_round_is_traced() {
        use blackjack_engine::engine::{Engine, EngineConfig};
        use blackjack_engine::player::Move;

        let log = CaptureLog::default();
        let registry = Registry::default().with(log.clone());

        tracing::subscriber::with_default(registry, || {
            let mut engine = Engine::new(EngineConfig::default(), 11);
            engine.begin_round(10).unwrap();
            while let Some(hand) = engine.player().next_active_hand() {
                engine.apply_move(hand, Move::Stand).unwrap();
            }
            engine.finish_round().unwrap();
        });

        let messages = log.messages();
        assert!(messages.iter().any(|m| m == "round dealt"));
        assert!(messages.iter().any(|m| m == "round settled"));
        let from_engine = |e: &LogEntry| e.target.starts_with("blackjack_engine");
        assert!(log.entries().iter().all(from_engine));
    }

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
