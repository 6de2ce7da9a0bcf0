// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs, path::{Path, PathBuf}};

use miette::{Context, IntoDiagnostic};
use showrunner::{Intent, JsonFileStorage, Show, ShowStorage, ShowSummary, ShowrunnerError,
                 State, compile_show, reduce, serialize_sync_state, try_serialize_pretty};

use crate::try_read_csv;

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "ros-v1.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub csv_path: PathBuf,
    pub show_name: String,
    pub output_path: PathBuf,
    pub storage_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub show: Show,
    pub summary: ShowSummary,
    pub output_path: PathBuf,
    pub storage_dir: Option<PathBuf>,
}

/// Read the CSV, compile it, and write the show document. With a storage folder, the
/// show is also saved there along with the sync payload of a fresh playback session.
///
/// # Errors
///
/// Returns an error if the CSV can't be read, or any output can't be written.
pub fn try_compile(options: &CompileOptions) -> miette::Result<CompileReport> {
    let csv = try_read_csv(&options.csv_path)?;
    let show = compile_show(&csv, &options.show_name);

    write_show_document(&show, &options.output_path)?;

    if let Some(storage_dir) = &options.storage_dir {
        seed_storage(&show, storage_dir)?;
    }

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "compiled run of show",
        show_id = %show.id,
        output = ?options.output_path
    );

    Ok(CompileReport {
        summary: ShowSummary::from(&show),
        show,
        output_path: options.output_path.clone(),
        storage_dir: options.storage_dir.clone(),
    })
}

fn write_show_document(show: &Show, output_path: &Path) -> miette::Result<()> {
    let write_error = || ShowrunnerError::WriteOutput {
        path: output_path.to_path_buf(),
    };

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .into_diagnostic()
            .wrap_err_with(write_error)?;
    }

    fs::write(output_path, try_serialize_pretty(show)?)
        .into_diagnostic()
        .wrap_err_with(write_error)
}

fn seed_storage(show: &Show, storage_dir: &Path) -> miette::Result<()> {
    let mut storage = JsonFileStorage::new(storage_dir);
    storage.save_show(show)?;

    let state = reduce(&State::default(), &Intent::set_show(show.clone()));
    storage.save_sync(&serialize_sync_state(&state))
}
