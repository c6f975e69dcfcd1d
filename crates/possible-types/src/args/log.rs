use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Info, warning and error messages
    Info,
    /// Debug, info, warning and error messages
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directives. Dependencies stay silent below the trace level.
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "possible_types=error,graphql_possible_types=error,off",
            LogLevel::Warn => "possible_types=warn,graphql_possible_types=warn,off",
            LogLevel::Info => "possible_types=info,graphql_possible_types=info,off",
            LogLevel::Debug => "possible_types=debug,graphql_possible_types=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.to_possible_value().map(|value| value.get_name().to_owned()).unwrap_or_default();
        f.write_str(&name)
    }
}
