// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Input and output files processing.
use anyhow::{Context, Result};
use log::{info, warn};
use std::{fs, path::Path};

/// Scores the players in the input file and writes the winner to the output file.
///
/// If the input cannot be read or scored the output file gets an
/// `Exception: <message>` line in place of the winner, only a failure to
/// write the output is returned as an error.
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    info!("Scoring players from {}", input.display());

    let result = match fs::read_to_string(input) {
        Ok(text) => {
            // Editors on Windows may start the file with a byte order mark.
            let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
            match threecard_core::evaluate(text) {
                Ok(winner) => winner.to_string(),
                Err(e) => {
                    warn!("Scoring failed: {e}");
                    format!("Exception: {e}")
                }
            }
        }
        Err(e) => {
            warn!("Read failed: {e}");
            format!("Exception: Cannot read input file {}: {e}", input.display())
        }
    };

    fs::write(output, &result)
        .with_context(|| format!("Cannot write output file {}", output.display()))?;

    info!("Result written to {}", output.display());
    Ok(())
}
