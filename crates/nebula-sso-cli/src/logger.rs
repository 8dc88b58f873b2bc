use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

pub(super) struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { format: LoggerFormat::default(), level: Level::INFO }
    }
}

#[derive(Default)]
pub(super) enum LoggerFormat {
    #[default]
    Json,
    Compact,
}

/// Logs go to stderr, stdout only ever carries the resolved identity.
pub(super) fn init_logger(config: LoggerConfig) {
    let builder = SubscriberBuilder::default().with_max_level(config.level).with_writer(std::io::stderr);

    match config.format {
        LoggerFormat::Json => builder.json().init(),
        LoggerFormat::Compact => builder.compact().init(),
    }
}
