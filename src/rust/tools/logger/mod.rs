use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
    Debug,
    Action,
}

/// Terminal logger. Everything goes to stderr so resolved text written to
/// stdout can be piped untouched.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Debug messages are only printed when verbose.
    pub fn with_verbose(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if level == LogLevel::Debug && !self.verbose {
            return;
        }
        eprintln!("{}", self.render_line(level, message.as_ref()));
    }

    pub fn log_with_details<I, S>(&self, level: LogLevel, message: impl AsRef<str>, details: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if level == LogLevel::Debug && !self.verbose {
            return;
        }
        eprintln!("{}", self.render_line(level, message.as_ref()));
        for detail in details {
            eprintln!("   ↳ {}", detail.as_ref());
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Success, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn action(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Action, message);
    }

    pub fn render_line(&self, level: LogLevel, message: &str) -> String {
        let mut out = String::new();
        let color = level.color();

        let _ = write!(
            out,
            "{}[incload]{} ",
            SetForegroundColor(Color::Grey),
            ResetColor
        );
        let _ = write!(
            out,
            "{}{}[{}]{}{} ",
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            level.as_label(),
            SetAttribute(Attribute::Reset),
            ResetColor
        );
        out.push_str(message);
        out
    }
}

impl LogLevel {
    pub fn as_label(self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Debug => "DEBUG",
            LogLevel::Action => "ACTION",
        }
    }

    fn color(self) -> Color {
        match self {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
            LogLevel::Debug => Color::Rgb {
                r: 121,
                g: 134,
                b: 203,
            },
            LogLevel::Action => Color::Rgb {
                r: 0,
                g: 188,
                b: 212,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_contains_label_and_message() {
        let logger = Logger::new();
        let line = logger.render_line(LogLevel::Warning, "careful");
        assert!(line.contains("[WARN]"));
        assert!(line.contains("[incload]"));
        assert!(line.ends_with("careful"));
    }

    #[test]
    fn test_info_is_labelled_info() {
        let line = Logger::new().render_line(LogLevel::Info, "using assets");
        assert!(line.contains("[INFO]"));
        assert!(!line.contains("[DEBUG]"));
        assert_eq!(LogLevel::Info.as_label(), "INFO");
    }

    #[test]
    fn test_verbose_flag() {
        assert!(!Logger::new().is_verbose());
        assert!(Logger::with_verbose(true).is_verbose());
    }
}
