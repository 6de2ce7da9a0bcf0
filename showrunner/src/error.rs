// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised at the IO edges of the crate. The compiler, reducer and deck builder
//! never produce these; they degrade to clamped or empty results instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ShowrunnerError {
    #[error("📄 Could not read run-of-show CSV: '{path}'")]
    #[diagnostic(
        code(showrunner::read_csv),
        help("Check that the file exists and is exported as UTF-8 CSV.")
    )]
    ReadCsv { path: PathBuf },

    #[error("💾 Could not write output file: '{path}'")]
    #[diagnostic(
        code(showrunner::write_output),
        help("Check that the output folder exists and is writable.")
    )]
    WriteOutput { path: PathBuf },

    #[error("🧩 Deck template is missing the '{placeholder}' placeholder")]
    #[diagnostic(
        code(showrunner::missing_template_placeholder),
        help("The template must contain both %%TITLE%% and %%DATA%%.")
    )]
    MissingTemplatePlaceholder { placeholder: &'static str },

    #[error("🔍 No stored show with id '{show_id}'")]
    #[diagnostic(code(showrunner::show_not_found))]
    ShowNotFound { show_id: String },

    #[error("🏷️ Show id '{show_id}' can't be stored")]
    #[diagnostic(
        code(showrunner::invalid_show_id),
        help("Give the show a name with at least one ASCII letter or digit.")
    )]
    InvalidShowId { show_id: String },

    #[error("🔌 Sync payload is not valid JSON for this schema")]
    #[diagnostic(
        code(showrunner::malformed_sync_payload),
        help(
            "A sync payload carries exactly: slide, scores, revealState, scoreboard, muted."
        )
    )]
    MalformedSyncPayload,

    #[error("📦 Stored show document is not valid JSON for this schema")]
    #[diagnostic(code(showrunner::malformed_show))]
    MalformedShow,
}

#[cfg(test)]
mod tests_error {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_diagnostic_codes_are_namespaced() {
        let errors = [
            ShowrunnerError::ReadCsv {
                path: PathBuf::from("show.csv"),
            },
            ShowrunnerError::MissingTemplatePlaceholder {
                placeholder: "%%DATA%%",
            },
            ShowrunnerError::MalformedSyncPayload,
        ];
        for error in errors {
            let code = error.code().map(|it| it.to_string()).unwrap_or_default();
            assert!(code.starts_with("showrunner::"), "code: {code}");
        }
    }

    #[test]
    fn test_message_names_the_placeholder() {
        let error = ShowrunnerError::MissingTemplatePlaceholder {
            placeholder: "%%TITLE%%",
        };
        assert!(error.to_string().contains("%%TITLE%%"));
    }
}
