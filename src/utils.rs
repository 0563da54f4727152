mod env_handler;

pub use env_handler::*;

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Parses a log level, falling back to info.
pub fn parse_log_level(log_level: &str) -> Level {
    Level::from_str(log_level).unwrap_or(Level::INFO)
}

/// Configure tracing with tracing_subscriber.
pub fn configure_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.with_max_level(parse_log_level(log_level))),
        )
        .init();
}
