//! Tracing subscriber for daylog's own diagnostics.
//!
//! The library reports rotation failures, dropped lines, and writer
//! start/stop through [`tracing`].  These events describe the logger
//! itself and go to stderr, never into the log files.

/// Collects the `message` field and every other field of a
/// [`tracing::Event`] as `key=value` pairs.
#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<String>,
}

impl tracing::field::Visit for FieldCollector {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Render a diagnostic event as `daylog: <level>: <message> key=value ...`.
fn render(event: &tracing::Event<'_>) -> String {
    let mut collector = FieldCollector::default();
    event.record(&mut collector);
    let level = event.metadata().level().as_str().to_ascii_lowercase();
    let mut line = format!("daylog: {level}: {}", collector.message);
    for field in &collector.fields {
        line.push(' ');
        line.push_str(field);
    }
    line
}

/// A [`tracing_subscriber::fmt::FormatEvent`] emitting one compact line per
/// diagnostic event.
struct DiagnosticFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for DiagnosticFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        writeln!(writer, "{}", render(event))
    }
}

/// Initialise the global [`tracing`] subscriber for diagnostics on stderr.
///
/// `RUST_LOG` takes precedence; otherwise warnings and errors are shown, or
/// everything from `debug` up when `verbose` is set.  Calling it twice is
/// harmless: the second call leaves the first subscriber in place.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let layer = fmt::layer()
        .event_format(DiagnosticFormatter)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).try_init().ok();
}
