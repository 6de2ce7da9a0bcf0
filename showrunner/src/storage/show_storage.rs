// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Persistence for compiled shows and the live sync payload, so playback survives a
//! reload and a second device can pick up where the first one is.
//!
//! [`ShowStorage`] is the seam; [`JsonFileStorage`] is the local implementation:
//!
//! ```text
//! <root>/
//! ├── shows/
//! │   └── <show-id>.json
//! └── sync.json
//! ```

use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use miette::{Context, IntoDiagnostic};

use crate::{Show, ShowrunnerError, SyncPayload, slugify, sync_payload_from_json,
            try_deserialize, try_serialize_pretty};

pub const SHOWS_FOLDER_NAME: &str = "shows";
pub const SYNC_FILE_NAME: &str = "sync.json";

/// An id a show can be stored under: non-empty, and already in [`slugify`] form, so it
/// can never name a hidden file or a path outside the shows folder.
#[must_use]
pub fn is_valid_show_id(show_id: &str) -> bool {
    !show_id.is_empty() && slugify(show_id) == show_id
}

/// Read and write shows and the sync payload as opaque JSON documents. A document that
/// was never written reads as `Ok(None)`.
pub trait ShowStorage {
    /// # Errors
    ///
    /// Returns [`ShowrunnerError::InvalidShowId`] if the show id fails
    /// [`is_valid_show_id`], or an error if the document cannot be written.
    fn save_show(&mut self, show: &Show) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns [`ShowrunnerError::ShowNotFound`] if `show_id` fails
    /// [`is_valid_show_id`], or an error if the document exists but cannot be read or
    /// parsed.
    fn load_show(&self, show_id: &str) -> miette::Result<Option<Show>>;

    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save_sync(&mut self, payload: &SyncPayload) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or parsed.
    fn load_sync(&self) -> miette::Result<Option<SyncPayload>>;

    /// Like [`ShowStorage::load_show`] but a missing show is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ShowrunnerError::ShowNotFound`] if nothing is stored under `show_id`.
    fn require_show(&self, show_id: &str) -> miette::Result<Show> {
        self.load_show(show_id)?.ok_or_else(|| {
            ShowrunnerError::ShowNotFound {
                show_id: show_id.to_string(),
            }
            .into()
        })
    }
}

/// [`ShowStorage`] backed by pretty printed JSON files under one root folder. Folders
/// are created on first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    #[must_use]
    pub fn root(&self) -> &Path { &self.root }

    #[must_use]
    pub fn show_path(&self, show_id: &str) -> PathBuf {
        self.root
            .join(SHOWS_FOLDER_NAME)
            .join(format!("{show_id}.json"))
    }

    #[must_use]
    pub fn sync_path(&self) -> PathBuf { self.root.join(SYNC_FILE_NAME) }
}

impl ShowStorage for JsonFileStorage {
    fn save_show(&mut self, show: &Show) -> miette::Result<()> {
        if !is_valid_show_id(&show.id) {
            return Err(ShowrunnerError::InvalidShowId {
                show_id: show.id.clone(),
            }
            .into());
        }

        let path = self.show_path(&show.id);
        write_document(&path, &try_serialize_pretty(show)?)?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "💾 saved show", show_id = %show.id, path = ?path);
        Ok(())
    }

    fn load_show(&self, show_id: &str) -> miette::Result<Option<Show>> {
        if !is_valid_show_id(show_id) {
            return Err(ShowrunnerError::ShowNotFound {
                show_id: show_id.to_string(),
            }
            .into());
        }

        let Some(bytes) = read_document(&self.show_path(show_id))? else {
            return Ok(None);
        };
        let show = try_deserialize(&bytes).wrap_err(ShowrunnerError::MalformedShow)?;
        Ok(Some(show))
    }

    fn save_sync(&mut self, payload: &SyncPayload) -> miette::Result<()> {
        let path = self.sync_path();
        write_document(&path, &try_serialize_pretty(payload)?)?;

        tracing::trace!(message = "💾 saved sync payload", slide = payload.slide);
        Ok(())
    }

    fn load_sync(&self) -> miette::Result<Option<SyncPayload>> {
        read_document(&self.sync_path())?
            .map(|bytes| sync_payload_from_json(&bytes))
            .transpose()
    }
}

fn write_document(path: &Path, content: &str) -> miette::Result<()> {
    let write_error = || ShowrunnerError::WriteOutput {
        path: path.to_path_buf(),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .into_diagnostic()
            .wrap_err_with(write_error)?;
    }
    fs::write(path, content)
        .into_diagnostic()
        .wrap_err_with(write_error)
}

fn read_document(path: &Path) -> miette::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error).into_diagnostic().wrap_err(format!(
            "Could not read stored document: '{}'",
            path.display()
        )),
    }
}
