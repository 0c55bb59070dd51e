// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::WriterConfig;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE: &str = "rawline_debug.log";

/// Where logs go and how verbose they are. Pass it to [`crate::init()`] or
/// [`crate::install_thread_local()`].
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level: tracing::Level::INFO,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(path: impl Into<String>, level: tracing::Level) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference, level: tracing::Level) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level,
        }
    }

    #[must_use]
    pub fn new_file_and_display(
        path: Option<String>,
        preferred_display: DisplayPreference,
        level: tracing::Level,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                path.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            ),
            level,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constructors() {
        let config = TracingConfig::new_file("a.log", tracing::Level::DEBUG);
        assert_eq!(config.writer_config, WriterConfig::File("a.log".into()));
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);

        let config = TracingConfig::new_file_and_display(
            None,
            DisplayPreference::Stderr,
            tracing::Level::WARN,
        );
        assert_eq!(
            config.writer_config,
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, DEFAULT_LOG_FILE.into())
        );

        assert_eq!(TracingConfig::default().writer_config, WriterConfig::None);
    }
}
