// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the qrtrip command-line interface.
//!
//! Three subcommands: `run` to execute a fuzzing campaign against an
//! external renderer, `rasterize` to turn a textual module grid into a PNG
//! for eyeballing, and `gen` to preview what the string generator produces.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;

#[derive(Parser)]
#[command(
    name = "qrtrip",
    about = "Differential round-trip fuzzer for QR code renderers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a fuzzing campaign against an external renderer
    Run {
        /// Renderer command, given after `--`; each trial appends the
        /// generated string as the last argument and reads the module grid
        /// from stdout
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            required = true,
            value_name = "RENDERER"
        )]
        renderer: Vec<String>,

        /// One-time build command executed before the first trial,
        /// whitespace-separated (e.g. --build "gcc qrender.c -o qrender")
        #[arg(long, value_name = "CMD")]
        build: Option<String>,

        /// Number of trials to run
        #[arg(long, default_value_t = config::DEFAULT_TRIALS)]
        trials: usize,

        /// Maximum UTF-8 byte budget per generated string (minimum 4)
        #[arg(long, default_value_t = config::DEFAULT_MAX_BYTES)]
        max_bytes: usize,

        /// Pixels per module side when rasterizing renderer output
        #[arg(
            long,
            default_value_t = config::DEFAULT_SCALE,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        scale: u32,

        /// Bound on a single renderer invocation, in seconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
        timeout_secs: u64,

        /// Seed for the random source; omit for a fresh seed per run
        #[arg(long)]
        seed: Option<u64>,

        /// Restrict the character pool to ASCII printable characters
        #[arg(long)]
        ascii_only: bool,

        /// Emit the campaign summary as JSON on stdout
        /// (per-trial lines move to stderr)
        #[arg(long)]
        json: bool,
    },

    /// Rasterize a textual module grid into a PNG image
    Rasterize {
        /// Grid text file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Output PNG path
        #[arg(short, long, default_value = "grid.png")]
        output: PathBuf,

        /// Pixels per module side
        #[arg(
            long,
            default_value_t = config::DEFAULT_SCALE,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        scale: u32,
    },

    /// Print sample strings from the character pool
    Gen {
        /// How many strings to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Maximum UTF-8 byte budget per string
        #[arg(long, default_value_t = config::DEFAULT_MAX_BYTES)]
        max_bytes: usize,

        /// Seed for the random source
        #[arg(long)]
        seed: Option<u64>,

        /// Restrict the character pool to ASCII printable characters
        #[arg(long)]
        ascii_only: bool,
    },
}
