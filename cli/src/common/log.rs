use clap::ValueEnum;
use std::fmt;
use tracing_subscriber::{fmt as subscriber_fmt, Layer, Registry};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogStyle {
    /// Pretty printed logs, spread over several lines
    Pretty,
    /// Standard text, one line per event
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl LogStyle {
    /// A formatting layer writing to stderr, so that stdout only carries the props
    pub fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
        let layer = subscriber_fmt::layer().with_writer(std::io::stderr);

        match self {
            LogStyle::Pretty => layer.pretty().boxed(),
            LogStyle::Text => layer.boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

impl AsRef<str> for LogStyle {
    fn as_ref(&self) -> &str {
        match self {
            LogStyle::Pretty => "pretty",
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
