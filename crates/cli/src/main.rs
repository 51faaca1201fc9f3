// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three-card game scorer CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;
use std::{path::PathBuf, process::ExitCode};

pub mod files;

#[derive(Debug, Parser)]
struct Cli {
    /// The players input file.
    #[clap(long = "in", short, default_value = "data.txt")]
    input: PathBuf,
    /// The winner output file.
    #[clap(long = "out", short, default_value = "result.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match files::process_file(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let cli = Cli::parse_from(["threecard"]);
        assert_eq!(cli.input, PathBuf::from("data.txt"));
        assert_eq!(cli.output, PathBuf::from("result.txt"));
    }

    #[test]
    fn custom_paths() {
        let cli = Cli::parse_from(["threecard", "-i", "players.txt", "--out", "winner.txt"]);
        assert_eq!(cli.input, PathBuf::from("players.txt"));
        assert_eq!(cli.output, PathBuf::from("winner.txt"));
    }
}
