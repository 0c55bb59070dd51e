// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, DynLayer, rolling_file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Which outputs get a `fmt` layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    /// Logging is off. No layers are created.
    None,
    Display(DisplayPreference),
    /// Path of the log file. The file is appended to, never rotated.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

impl WriterConfig {
    /// This erases the concrete type of the writer, and returns a boxed layer. This
    /// is useful for composition of layers. There's more info in the docs
    /// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
    #[must_use]
    pub fn create_display_layer<S>(&self, level_filter: LevelFilter) -> Option<Box<DynLayer<S>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let preferred_display = match self {
            WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => *it,
            WriterConfig::None | WriterConfig::File(_) => return None,
        };

        let fmt_layer = create_fmt!().with_ansi(true);

        let layer: Box<DynLayer<S>> = match preferred_display {
            DisplayPreference::Stdout => Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            ),
            DisplayPreference::Stderr => Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            ),
        };

        Some(layer)
    }

    /// Same as [`WriterConfig::create_display_layer`], for the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file path is not usable.
    pub fn try_create_file_layer<S>(
        &self,
        level_filter: LevelFilter,
    ) -> miette::Result<Option<Box<DynLayer<S>>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let path = match self {
            WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => path,
            WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
        };

        let file = rolling_file_appender_impl::try_create(path)?;
        let fmt_layer = create_fmt!().with_ansi(false);

        let layer: Box<DynLayer<S>> =
            Box::new(fmt_layer.with_writer(file).with_filter(level_filter));

        Ok(Some(layer))
    }
}
