// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! JSON helpers shared by the storage adapters and the sync payload codec.

use miette::IntoDiagnostic;
use serde::{Deserialize, Serialize};

/// Serialize `data` to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if `data` cannot be represented as JSON (e.g. a map with non string
/// keys).
pub fn try_serialize<T: Serialize>(data: &T) -> miette::Result<Vec<u8>> {
    serde_json::to_vec(data).into_diagnostic()
}

/// Serialize `data` to indented JSON, for files a person may open.
///
/// # Errors
///
/// Returns an error if `data` cannot be represented as JSON.
pub fn try_serialize_pretty<T: Serialize>(data: &T) -> miette::Result<String> {
    serde_json::to_string_pretty(data).into_diagnostic()
}

/// Deserialize JSON bytes into `T`.
///
/// # Errors
///
/// Returns an error if:
/// - The buffer is not valid JSON
/// - The JSON does not match the shape of `T`
pub fn try_deserialize<T: for<'de> Deserialize<'de>>(buffer: &[u8]) -> miette::Result<T> {
    serde_json::from_slice(buffer).into_diagnostic()
}

#[cfg(test)]
mod tests_json_serde {
    use crate::{Section, Show, json_serde};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_serde() -> miette::Result<()> {
        let value = Show {
            id: "trivia".to_string(),
            name: "Trivia".to_string(),
            sections: vec![Section::new("ROUND 1", vec![])],
            created: 1_700_000_000_000,
        };

        // Struct -> bytes.
        let bytes = json_serde::try_serialize(&value)?;

        // Bytes -> struct.
        let back = json_serde::try_deserialize::<Show>(&bytes)?;
        assert_eq!(value, back);

        let pretty = json_serde::try_serialize_pretty(&value)?;
        assert!(pretty.contains("\n  \"sections\""));

        Ok(())
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(json_serde::try_deserialize::<Show>(b"{not json").is_err());
        assert!(json_serde::try_deserialize::<Show>(br#"{"id": "x"}"#).is_err());
    }
}
