// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::Parser;
use showrunner::DEFAULT_DECK_TITLE;

use crate::{GlobalOption, deck::ExportOptions, show_name_or_file_stem};

#[derive(Debug, Parser)]
#[command(bin_name = "deck")]
#[command(about = "🃏 Export HTML slide decks from a run-of-show CSV")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  deck <CSV> [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
pub struct CLIArg {
    #[arg(value_name = "CSV", help = "Run-of-show spreadsheet exported as CSV")]
    pub csv_path: PathBuf,

    #[arg(
        long,
        short = 'n',
        help = "Base name of the deck files [default: CSV file name]"
    )]
    pub name: Option<String>,

    #[arg(
        long,
        short = 't',
        value_name = "HTML",
        help = "HTML template containing `%%TITLE%%` and `%%DATA%%` [default: built in]"
    )]
    pub template: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_DECK_TITLE, help = "Deck title")]
    pub title: String,

    #[arg(
        long,
        short = 'o',
        value_name = "DIR",
        default_value = ".",
        help = "Folder to write the decks into"
    )]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

impl From<CLIArg> for ExportOptions {
    fn from(cli_arg: CLIArg) -> Self {
        Self {
            base_name: show_name_or_file_stem(cli_arg.name, &cli_arg.csv_path),
            csv_path: cli_arg.csv_path,
            template_path: cli_arg.template,
            title: cli_arg.title,
            out_dir: cli_arg.out_dir,
        }
    }
}

#[cfg(test)]
mod tests_clap_config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["deck", "SHOW_MASTER_V3.csv"]).unwrap();

        assert_eq!(
            ExportOptions::from(cli_arg),
            ExportOptions {
                csv_path: PathBuf::from("SHOW_MASTER_V3.csv"),
                base_name: "SHOW_MASTER_V3".to_string(),
                template_path: None,
                title: "LINECONIC LIVE".to_string(),
                out_dir: PathBuf::from("."),
            }
        );
    }

    #[test]
    fn test_overrides() {
        let cli_arg = CLIArg::try_parse_from([
            "deck",
            "show.csv",
            "--template",
            "deck.html",
            "--title",
            "THE SPLIT",
            "--out-dir",
            "decks",
            "-n",
            "SPLIT",
        ])
        .unwrap();

        let options = ExportOptions::from(cli_arg);
        assert_eq!(options.template_path, Some(PathBuf::from("deck.html")));
        assert_eq!(options.title, "THE SPLIT");
        assert_eq!(options.out_dir, PathBuf::from("decks"));
        assert_eq!(options.base_name, "SPLIT");
    }
}
