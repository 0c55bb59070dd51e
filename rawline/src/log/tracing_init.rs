// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TracingConfig;
use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the layers for `tracing_config` as the global default subscriber. Does
/// nothing if the config turns logging off.
///
/// # Errors
///
/// Returns an error if the layers can't be created or a global subscriber is already
/// installed.
pub fn init(tracing_config: TracingConfig) -> miette::Result<()> {
    match try_create_layers(&tracing_config)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Install the layers for the current thread only, until the returned guard is dropped.
/// Returns `None` if the config turns logging off.
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn install_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<DefaultGuard>> {
    Ok(try_create_layers(&tracing_config)?.map(|layers| {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(layers))
    }))
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// Returns an error if the log file path is not usable.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let writer_config = &tracing_config.writer_config;
    if *writer_config == super::WriterConfig::None {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();

    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add more
    // layers which don't have a level filter.
    layers.push(Box::new(level_filter));

    if let Some(layer) = writer_config.create_display_layer(level_filter) {
        layers.push(layer);
    }

    if let Some(layer) = writer_config.try_create_file_layer(level_filter)? {
        layers.push(layer);
    }

    Ok(Some(layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayPreference, WriterConfig};
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn test_none_creates_no_layers() {
        let layers = try_create_layers(&TracingConfig::default()).unwrap();
        assert!(layers.is_none());
        assert!(install_thread_local(TracingConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_layer_count() {
        let config = TracingConfig::new_display(DisplayPreference::Stderr, tracing::Level::INFO);
        let layers = try_create_layers(&config).unwrap().unwrap();
        // Level filter + display.
        assert_eq!(layers.len(), 2);
    }

    #[test]
    #[serial]
    fn test_file_logging_writes_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rawline.log");
        let path_str = path.to_string_lossy().to_string();

        let config = TracingConfig {
            writer_config: WriterConfig::File(path_str),
            level: tracing::Level::DEBUG,
        };

        {
            let _guard = install_thread_local(config).unwrap().unwrap();
            tracing::debug!(message = "hello from the test", point = 3);
            tracing::trace!(message = "filtered out");
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the test"), "{contents}");
        assert!(contents.contains("point=3"), "{contents}");
        assert!(!contents.contains("filtered out"), "{contents}");
    }
}
