//! Diagnostic log of a generation run.
//!
//! The log is a plain-text side channel returned next to the generated
//! output. A message is recorded only when its level is exactly the
//! configured level: configuring `Verbose` records verbose messages and
//! nothing else. Existing tooling depends on this, so it is not a
//! threshold.
//!
//! Every message is also emitted as a `tracing` event, whatever the
//! configured level.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Level of a log message, and the configured level of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoggingLevel {
    #[default]
    None,
    Exception,
    Information,
    Verbose,
}

impl LoggingLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LoggingLevel::None => "None",
            LoggingLevel::Exception => "Exception",
            LoggingLevel::Information => "Information",
            LoggingLevel::Verbose => "Verbose",
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoggingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(LoggingLevel::None),
            "exception" => Ok(LoggingLevel::Exception),
            "information" | "info" => Ok(LoggingLevel::Information),
            "verbose" => Ok(LoggingLevel::Verbose),
            other => Err(format!("unknown logging level: {}", other)),
        }
    }
}

/// Accumulated diagnostic text.
#[derive(Debug, Clone)]
pub struct GenerationLog {
    level: LoggingLevel,
    text: String,
}

impl GenerationLog {
    /// Creates a log recording messages of exactly `level`.
    pub fn new(level: LoggingLevel) -> Self {
        let mut text = String::new();
        if level == LoggingLevel::None {
            text.push_str("Logging has been disabled.\n");
        }
        GenerationLog { level, text }
    }

    /// Returns the configured level.
    pub fn level(&self) -> LoggingLevel {
        self.level
    }

    /// Records a message declared at `level`.
    pub fn record(&mut self, level: LoggingLevel, message: fmt::Arguments<'_>) {
        match level {
            LoggingLevel::Exception => tracing::error!("{}", message),
            LoggingLevel::Information => tracing::debug!("{}", message),
            LoggingLevel::Verbose => tracing::trace!("{}", message),
            LoggingLevel::None => {}
        }

        if level != LoggingLevel::None && level == self.level {
            use fmt::Write;
            // Writing into a String cannot fail.
            let _ = writeln!(self.text, "{}: {}", level, message);
        }
    }

    pub fn exception(&mut self, message: fmt::Arguments<'_>) {
        self.record(LoggingLevel::Exception, message);
    }

    pub fn information(&mut self, message: fmt::Arguments<'_>) {
        self.record(LoggingLevel::Information, message);
    }

    pub fn verbose(&mut self, message: fmt::Arguments<'_>) {
        self.record(LoggingLevel::Verbose, message);
    }

    /// Returns the text recorded so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the log, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
