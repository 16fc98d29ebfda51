// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handdrill trainer game.
//!
//! A [Session] deals hands for a [GameMode], scores the user guesses with a
//! [ScoreKeeper] and persists the high score with a [HighScoreStore]:
//!
//! ```
//! # use handdrill_game::*;
//! let mut session = Session::new(Config {
//!     mode: GameMode::Gauntlet,
//!     seed: Some(7),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let hand = session.deal().unwrap();
//! let outcome = session.guess(hand.value().category()).unwrap();
//! assert!(outcome.correct);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod mode;
pub use mode::{GameMode, ParseModeError};

pub mod score;
pub use score::{GuessOutcome, ScoreKeeper};

pub mod session;
pub use session::{Config, Session};

pub mod store;
pub use store::HighScoreStore;
