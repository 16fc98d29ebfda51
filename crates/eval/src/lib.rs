// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handdrill poker hand classifier.
//!
//! Classifies five cards poker hands into one of ten categories, from high
//! card up to royal flush, with the ranks needed to compare hands of the same
//! category:
//!
//! ```
//! # use handdrill_eval::*;
//! let cards = ["AH", "2D", "3C", "4S", "5H"]
//!     .into_iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let value = classify(&cards).unwrap();
//! assert_eq!(value.category(), HandCategory::Straight);
//! assert_eq!(value.tiebreak(), [Rank::Five]);
//! assert_eq!(PointsTable::default().points_for(value.category()), 4);
//! ```
//!
//! [best_of] finds the best hand out of five or more cards, and the
//! [generator] module builds random hands or hands of a given category.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{HandCategory, ParseCategoryError};

pub mod eval;
pub use eval::{Hand, HandValue, InvalidHand, best_of, classify};

pub mod generator;
pub use generator::{GenerationStats, HandGenerator, WeightError, WeightTable};

pub mod points;
pub use points::PointsTable;

// Reexport cards types.
pub use handdrill_cards::{Card, Deck, Rank, Suit};
