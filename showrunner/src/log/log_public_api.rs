// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{TracingConfig, try_create_layers};

/// Install a global default subscriber, which once set can't be unset or changed. Use
/// this in apps.
///
/// Logging is **disabled** by default: with [`tracing_core::LevelFilter::OFF`] (or no
/// writer) this does nothing, and every [`tracing`] event is dropped.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if logging is off.
    if !it.is_enabled() {
        return Ok(());
    }

    let layers = try_create_layers(&it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| miette::miette!("Could not install global logger: {error}"))
}

/// Install a subscriber for the current thread only, until the returned guard is
/// dropped. Use this in tests. Returns `None` when logging is off.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if logging is off.
    if !it.is_enabled() {
        return Ok(None);
    }

    let layers = try_create_layers(&it)?;
    let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layers));
    Ok(Some(guard))
}
