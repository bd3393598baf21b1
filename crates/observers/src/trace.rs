use bondkit_core::{Addend, Observer};
use bondkit_finders::first_fit::Event;
use tracing::Level;

/// Emits a `tracing` event at a level chosen at runtime.
///
/// `tracing::event!` needs a constant level, so each level gets its own
/// callsite.
macro_rules! event_at {
    ($level:expr, $($args:tt)+) => {{
        let level = $level;
        if level == Level::ERROR {
            tracing::event!(Level::ERROR, $($args)+);
        } else if level == Level::WARN {
            tracing::event!(Level::WARN, $($args)+);
        } else if level == Level::INFO {
            tracing::event!(Level::INFO, $($args)+);
        } else if level == Level::DEBUG {
            tracing::event!(Level::DEBUG, $($args)+);
        } else {
            tracing::event!(Level::TRACE, $($args)+);
        }
    }};
}

/// Logs finder events with structured fields.
///
/// Matched draws are logged with `number`, `complement`, `position`, and
/// `complement_position`; unmatched draws with `number` and `position`.
/// The observer never returns an action, so it can sit at the end of a
/// [`Chain`](crate::Chain) without changing the result.
///
/// ```
/// use bondkit_finders::first_fit;
/// use bondkit_observers::TraceObserver;
///
/// let solution = first_fit::find(4, &[3, 4, 1, 0, 4], TraceObserver::default());
/// assert_eq!(solution.bonds.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    level: Level,
}

impl TraceObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl<T: Addend, A> Observer<Event<T>, A> for TraceObserver {
    fn observe(&mut self, event: &Event<T>) -> Option<A> {
        match *event {
            Event::Matched {
                number,
                complement,
                position,
                complement_position,
            } => {
                event_at!(
                    self.level,
                    %number,
                    %complement,
                    position,
                    complement_position,
                    "matched bond"
                );
            }
            Event::Unmatched { number, position } => {
                event_at!(self.level, %number, position, "no complement remaining");
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use bondkit_core::Bond;
    use bondkit_finders::first_fit::{self, Action, Status};
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory sink for formatted log lines.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().expect("lock should not be poisoned").clone();
            String::from_utf8(bytes)
                .expect("log output should be utf-8")
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("lock should not be poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs a scan with a subscriber that accepts events up to `max_level`.
    fn capture(observer: TraceObserver, max_level: Level) -> Vec<String> {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(max_level)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            first_fit::find(4, &[3, 4, 1, 0, 4], observer);
        });

        captured.lines()
    }

    #[test]
    fn defaults_to_debug() {
        assert_eq!(TraceObserver::default().level(), Level::DEBUG);
    }

    #[test]
    fn never_changes_the_result() {
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            let solution = first_fit::find(4, &[3, 4, 1, 0, 4], TraceObserver::new(level));

            assert_eq!(solution.status, Status::Exhausted);
            assert_eq!(solution.bonds, vec![Bond::new(3, 1), Bond::new(4, 0)]);
            assert_eq!(solution.unmatched, vec![4]);
        }
    }

    #[test]
    fn returns_no_action() {
        let mut observer = TraceObserver::default();
        let event = Event::Unmatched {
            number: 7_u8,
            position: 0,
        };

        let action: Option<Action> = observer.observe(&event);
        assert_eq!(action, None);
    }

    #[test]
    fn logs_one_record_per_draw() {
        let lines = capture(TraceObserver::new(Level::INFO), Level::INFO);

        assert_eq!(lines.len(), 3, "unexpected log output: {lines:?}");

        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("matched bond"));
        assert!(lines[0].contains("number=3"));
        assert!(lines[0].contains("complement=1"));
        assert!(lines[0].contains("position=0"));
        assert!(lines[0].contains("complement_position=2"));

        assert!(lines[1].contains("matched bond"));
        assert!(lines[1].contains("number=4"));
        assert!(lines[1].contains("complement=0"));
        assert!(lines[1].contains("position=1"));

        assert!(lines[2].contains("no complement remaining"));
        assert!(lines[2].contains("number=4"));
        assert!(lines[2].contains("position=4"));
    }

    #[test]
    fn respects_subscriber_max_level() {
        let lines = capture(TraceObserver::new(Level::DEBUG), Level::INFO);
        assert!(lines.is_empty(), "unexpected log output: {lines:?}");

        let lines = capture(TraceObserver::new(Level::WARN), Level::INFO);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.contains("WARN")));
    }
}
