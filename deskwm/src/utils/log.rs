use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build the subscriber for the shell. `RUST_LOG` wins over the configured level.
///
/// An unparsable level falls back to `info` and the parse error is handed back so it can
/// be reported once logging is up.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber + Send + Sync, Option<ParseError>) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| level_regex.to_owned());
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(&level)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy("")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(layer)
}
