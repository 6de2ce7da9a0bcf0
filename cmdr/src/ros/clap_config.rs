// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::Parser;

use crate::{GlobalOption, ros::{CompileOptions, DEFAULT_OUTPUT_FILE_NAME},
            show_name_or_file_stem};

#[derive(Debug, Parser)]
#[command(bin_name = "ros")]
#[command(about = "🎬 Compile a run-of-show CSV into a show document")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  ros <CSV> [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
pub struct CLIArg {
    #[arg(value_name = "CSV", help = "Run-of-show spreadsheet exported as CSV")]
    pub csv_path: PathBuf,

    #[arg(
        long,
        short = 'n',
        help = "Show name, the show id is derived from it [default: CSV file name]"
    )]
    pub name: Option<String>,

    #[arg(
        long,
        short = 'o',
        default_value = DEFAULT_OUTPUT_FILE_NAME,
        help = "Where to write the show document"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        short = 's',
        value_name = "DIR",
        help = "Also save the show, and a sync payload parked on its first slide, into this storage folder"
    )]
    pub storage: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

impl From<CLIArg> for CompileOptions {
    fn from(cli_arg: CLIArg) -> Self {
        Self {
            show_name: show_name_or_file_stem(cli_arg.name, &cli_arg.csv_path),
            csv_path: cli_arg.csv_path,
            output_path: cli_arg.output,
            storage_dir: cli_arg.storage,
        }
    }
}

#[cfg(test)]
mod tests_clap_config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["ros", "shows/SHOW_MASTER_V3.csv"]).unwrap();
        assert!(!cli_arg.global_options.enable_logging);

        assert_eq!(
            CompileOptions::from(cli_arg),
            CompileOptions {
                csv_path: PathBuf::from("shows/SHOW_MASTER_V3.csv"),
                show_name: "SHOW_MASTER_V3".to_string(),
                output_path: PathBuf::from("ros-v1.json"),
                storage_dir: None,
            }
        );
    }

    #[test]
    fn test_all_options() {
        let cli_arg = CLIArg::try_parse_from([
            "ros",
            "show.csv",
            "--name",
            "THE SPLIT",
            "-o",
            "out/split.json",
            "--storage",
            "store",
            "-lv",
        ])
        .unwrap();
        assert!(cli_arg.global_options.enable_logging);
        assert!(cli_arg.global_options.verbose);

        let options = CompileOptions::from(cli_arg);
        assert_eq!(options.show_name, "THE SPLIT");
        assert_eq!(options.output_path, PathBuf::from("out/split.json"));
        assert_eq!(options.storage_dir, Some(PathBuf::from("store")));
    }

    #[test]
    fn test_csv_is_required() {
        assert!(CLIArg::try_parse_from(["ros"]).is_err());
    }
}
