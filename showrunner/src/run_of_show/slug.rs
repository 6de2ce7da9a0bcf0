// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Derive an id from a display name: lower-case it, collapse every run of characters
/// that are not ASCII letters or digits into one `-`, and trim `-` from both ends.
///
/// | name                     | id                    |
/// | ------------------------ | --------------------- |
/// | `ROUND 1: SOURCE CODE`   | `round-1-source-code` |
/// | `  Friday -- Night!! `   | `friday-night`        |
/// | `***`                    | ``                    |
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut acc = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !acc.is_empty() {
                acc.push('-');
            }
            pending_hyphen = false;
            acc.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    acc
}
