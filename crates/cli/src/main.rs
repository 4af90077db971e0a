// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use pokerdice_core::{Console, Game, Prompter};

#[derive(Debug, Parser)]
struct Cli {
    /// The random seed, asked at startup if not given.
    #[clap(long, short, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Log dice rolls and selections to stderr.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut console = Console::stdio();
    let seed = match cli.seed {
        Some(seed) => seed,
        None => console.read_int("Enter a random seed: ")?,
    };

    info!("Starting game with seed {seed}");
    Game::with_seed(console, seed).run()
}
