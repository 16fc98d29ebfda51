// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A poker hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandCategory {
    /// No matching cards.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; Self::COUNT] = {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
    };

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        Self::ALL.into_iter()
    }

    /// The category human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// The category identifier, the same used by serde.
    pub fn id(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high-card",
            HandCategory::OnePair => "one-pair",
            HandCategory::TwoPair => "two-pair",
            HandCategory::ThreeOfAKind => "three-of-a-kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full-house",
            HandCategory::FourOfAKind => "four-of-a-kind",
            HandCategory::StraightFlush => "straight-flush",
            HandCategory::RoyalFlush => "royal-flush",
        }
    }

    /// The 1-based position in the ranking, 1 for high card up to 10 for a
    /// royal flush.
    pub fn position(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown hand category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand category '{0}'")]
pub struct ParseCategoryError(String);

impl FromStr for HandCategory {
    type Err = ParseCategoryError;

    /// Parses a category from its identifier, name, or ranking position.
    ///
    /// Short forms like `pair`, `three-kind`, or `four-kind` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s
            .trim()
            .to_lowercase()
            .replace(['_', ' '], "-");

        if let Ok(pos) = norm.parse::<usize>() {
            return pos
                .checked_sub(1)
                .and_then(|idx| Self::ALL.get(idx))
                .copied()
                .ok_or_else(|| ParseCategoryError(s.to_string()));
        }

        let category = match norm.as_str() {
            "high-card" | "high" => HandCategory::HighCard,
            "one-pair" | "pair" => HandCategory::OnePair,
            "two-pair" | "two-pairs" => HandCategory::TwoPair,
            "three-of-a-kind" | "three-kind" | "trips" => HandCategory::ThreeOfAKind,
            "straight" => HandCategory::Straight,
            "flush" => HandCategory::Flush,
            "full-house" => HandCategory::FullHouse,
            "four-of-a-kind" | "four-kind" | "quads" => HandCategory::FourOfAKind,
            "straight-flush" => HandCategory::StraightFlush,
            "royal-flush" | "royal" => HandCategory::RoyalFlush,
            _ => return Err(ParseCategoryError(s.to_string())),
        };

        Ok(category)
    }
}
