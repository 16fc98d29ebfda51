// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handdrill terminal trainer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

use handdrill_eval::{Card, PointsTable, best_of, classify};
use handdrill_game::{Config, GameMode, HighScoreStore};

pub mod terminal;

#[derive(Debug, Parser)]
#[clap(about = "Poker hands recognition trainer")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a training round.
    Play {
        /// The game mode: easy, medium, hard, or gauntlet.
        #[clap(long, short, default_value_t = GameMode::Easy)]
        mode: GameMode,
        /// Seed for reproducible deals.
        #[clap(long, short)]
        seed: Option<u64>,
        /// The high score database path.
        #[clap(long)]
        db: Option<PathBuf>,
        /// Do not persist the high score.
        #[clap(long, conflicts_with = "db")]
        no_save: bool,
    },
    /// Classify a five cards hand, e.g. `classify AS KS QS JS TS`.
    Classify {
        /// The hand cards.
        #[clap(num_args = 5, required = true)]
        cards: Vec<Card>,
    },
    /// Find the best five cards hand out of five or more cards.
    Best {
        /// The cards to pick the hand from.
        #[clap(num_args = 5.., required = true)]
        cards: Vec<Card>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let points = PointsTable::default();

    match command {
        Command::Play {
            mode,
            seed,
            db,
            no_save,
        } => {
            let db_path = match (db, no_save) {
                (_, true) => None,
                (Some(path), false) => Some(path),
                (None, false) => Some(HighScoreStore::default_path()?),
            };

            terminal::run(Config {
                mode,
                points,
                seed,
                db_path,
            })
        }
        Command::Classify { cards } => {
            let value = classify(&cards)?;
            println!(
                "{}  {value}  {} points",
                terminal::format_cards(&cards),
                points.points_for(value.category())
            );

            Ok(())
        }
        Command::Best { cards } => {
            let (value, hand) = best_of(&cards)?;
            println!(
                "{}  {value}  {} points",
                terminal::format_cards(hand.cards()),
                points.points_for(value.category())
            );

            Ok(())
        }
    }
}
