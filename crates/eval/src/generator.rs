// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands generator.
//!
//! Generates random hands and hands of a given category. Hands of a given
//! category are built directly from the category definition, picking random
//! ranks and suits that cannot produce a stronger category, so generation
//! always terminates.
//!
//! ```
//! # use handdrill_eval::{HandCategory, generator};
//! let mut rng = rand::rng();
//! let hand = generator::generate_of_category(HandCategory::FullHouse, &mut rng).unwrap();
//! assert_eq!(hand.value().category(), HandCategory::FullHouse);
//! ```
use ahash::AHashMap;
use rand::{
    distr::{Distribution, weighted::WeightedIndex},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::LazyLock};
use thiserror::Error;

use handdrill_cards::{Card, Deck, Rank, Suit};

use crate::{Hand, HandCategory, InvalidHand, eval::straight_high};

/// Rank sets of five distinct ranks that do not make a straight.
static NO_STRAIGHT_RANKS: LazyLock<Vec<u16>> = LazyLock::new(|| {
    (0u16..1 << 13)
        .filter(|bits| bits.count_ones() == 5 && straight_high(*bits).is_none())
        .collect()
});

/// Generates a hand by drawing five cards from a full deck.
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Result<Hand, InvalidHand> {
    let mut deck = Deck::new_and_shuffled(rng);
    let cards = deck.deal_many(Hand::SIZE).unwrap_or_default();
    Hand::try_from(cards)
}

/// Generates a hand that classifies as the given category.
pub fn generate_of_category<R: Rng + ?Sized>(
    category: HandCategory,
    rng: &mut R,
) -> Result<Hand, InvalidHand> {
    let mut cards = Vec::with_capacity(Hand::SIZE);

    match category {
        HandCategory::HighCard => {
            let ranks = no_straight_ranks(rng);
            let suits = mixed_suits(rng);
            cards.extend(ranks.into_iter().zip(suits).map(|(r, s)| Card::new(r, s)));
        }
        HandCategory::OnePair => {
            let ranks = distinct_ranks(rng, 4);
            push_group(&mut cards, rng, ranks[0], 2);
            push_kickers(&mut cards, rng, &ranks[1..]);
        }
        HandCategory::TwoPair => {
            let ranks = distinct_ranks(rng, 3);
            push_group(&mut cards, rng, ranks[0], 2);
            push_group(&mut cards, rng, ranks[1], 2);
            push_kickers(&mut cards, rng, &ranks[2..]);
        }
        HandCategory::ThreeOfAKind => {
            let ranks = distinct_ranks(rng, 3);
            push_group(&mut cards, rng, ranks[0], 3);
            push_kickers(&mut cards, rng, &ranks[1..]);
        }
        HandCategory::Straight => {
            // Five high (the wheel) up to ace high.
            let ranks = straight_ranks(rng.random_range(3..13));
            let suits = mixed_suits(rng);
            cards.extend(ranks.into_iter().zip(suits).map(|(r, s)| Card::new(r, s)));
        }
        HandCategory::Flush => {
            let suit = random_suit(rng);
            let ranks = no_straight_ranks(rng);
            cards.extend(ranks.into_iter().map(|r| Card::new(r, suit)));
        }
        HandCategory::FullHouse => {
            let ranks = distinct_ranks(rng, 2);
            push_group(&mut cards, rng, ranks[0], 3);
            push_group(&mut cards, rng, ranks[1], 2);
        }
        HandCategory::FourOfAKind => {
            let ranks = distinct_ranks(rng, 2);
            push_group(&mut cards, rng, ranks[0], 4);
            push_kickers(&mut cards, rng, &ranks[1..]);
        }
        HandCategory::StraightFlush => {
            // Five high up to king high, ace high is a royal flush.
            let suit = random_suit(rng);
            let ranks = straight_ranks(rng.random_range(3..12));
            cards.extend(ranks.into_iter().map(|r| Card::new(r, suit)));
        }
        HandCategory::RoyalFlush => {
            let suit = random_suit(rng);
            let ranks = straight_ranks(Rank::Ace as usize);
            cards.extend(ranks.into_iter().map(|r| Card::new(r, suit)));
        }
    }

    cards.shuffle(rng);
    Hand::try_from(cards)
}

/// Generates a hand with a category picked from a weight table.
pub fn generate_weighted<R: Rng + ?Sized>(
    weights: &WeightTable,
    rng: &mut R,
) -> Result<Hand, InvalidHand> {
    generate_of_category(weights.choose(rng), rng)
}

/// Picks `n` distinct random ranks.
fn distinct_ranks<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Rank> {
    Rank::ALL.choose_multiple(rng, n).copied().collect()
}

/// Picks five distinct ranks that do not make a straight.
fn no_straight_ranks<R: Rng + ?Sized>(rng: &mut R) -> Vec<Rank> {
    let bits = NO_STRAIGHT_RANKS
        .choose(rng)
        .copied()
        .unwrap_or_default();

    Rank::ranks()
        .filter(|&r| bits & (1 << r as u16) != 0)
        .collect()
}

/// Returns the straight ranks given the high card index, 3 is the wheel.
fn straight_ranks(high: usize) -> Vec<Rank> {
    if high == Rank::Five as usize {
        vec![Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five]
    } else {
        Rank::ALL[high - 4..=high].to_vec()
    }
}

fn random_suit<R: Rng + ?Sized>(rng: &mut R) -> Suit {
    Suit::ALL[rng.random_range(0..Suit::ALL.len())]
}

/// Five random suits that are not all the same.
fn mixed_suits<R: Rng + ?Sized>(rng: &mut R) -> [Suit; Hand::SIZE] {
    let mut suits = [Suit::Clubs; Hand::SIZE];
    suits.iter_mut().for_each(|s| *s = random_suit(rng));

    if suits.iter().all(|&s| s == suits[0]) {
        let pos = rng.random_range(0..Hand::SIZE);
        let offset = rng.random_range(1..Suit::ALL.len());
        suits[pos] = Suit::ALL[(suits[pos] as usize + offset) % Suit::ALL.len()];
    }

    suits
}

/// Pushes `n` cards of the same rank with distinct suits.
fn push_group<R: Rng + ?Sized>(cards: &mut Vec<Card>, rng: &mut R, rank: Rank, n: usize) {
    cards.extend(
        Suit::ALL
            .choose_multiple(rng, n)
            .map(|&suit| Card::new(rank, suit)),
    );
}

/// Pushes one card for each rank with random suits.
fn push_kickers<R: Rng + ?Sized>(cards: &mut Vec<Card>, rng: &mut R, ranks: &[Rank]) {
    for &rank in ranks {
        cards.push(Card::new(rank, random_suit(rng)));
    }
}

/// Error returned for a weight table that cannot be sampled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    /// All the categories have zero weight.
    #[error("hand category weights are all zero")]
    AllZero,
    /// The weights sum does not fit in a `u32`.
    #[error("hand category weights sum overflows")]
    Overflow,
    /// Complexity levels go from 1 to 4.
    #[error("invalid complexity level {0}, expected 1..=4")]
    Complexity(u8),
}

/// Category weights used to pick the category of a generated hand.
///
/// Serializes as a map from category identifier to weight, missing categories
/// have zero weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<HandCategory, u32>",
    into = "BTreeMap<HandCategory, u32>"
)]
pub struct WeightTable {
    weights: [u32; HandCategory::COUNT],
    dist: WeightedIndex<u32>,
}

impl WeightTable {
    /// Base weights before complexity adjustment, from high card to royal flush.
    const BASE: [u32; HandCategory::COUNT] = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

    /// Creates a weight table, weights are indexed by category.
    pub fn new(weights: [u32; HandCategory::COUNT]) -> Result<Self, WeightError> {
        let total = weights
            .iter()
            .try_fold(0u32, |acc, &w| acc.checked_add(w))
            .ok_or(WeightError::Overflow)?;
        if total == 0 {
            return Err(WeightError::AllZero);
        }

        let dist = WeightedIndex::new(weights).map_err(|_| WeightError::AllZero)?;
        Ok(Self { weights, dist })
    }

    /// A table where all categories are equally likely.
    pub fn uniform() -> Self {
        Self::from_base(|_| 1)
    }

    /// The weights for a complexity level.
    ///
    /// Each category has a base weight from 1 for a royal flush up to 10 for
    /// a high card, the levels adjust the base weight `w` as follows:
    ///
    /// 1. Easy, middle categories most common: `w * (11 - w)`.
    /// 2. Medium, the base weights: `w`.
    /// 3. Hard, the common hands dominate: `w * w`.
    /// 4. Gauntlet, all categories equally likely: `1`.
    pub fn for_complexity(level: u8) -> Result<Self, WeightError> {
        let adjust: fn(u32) -> u32 = match level {
            1 => |w| w * (11 - w),
            2 => |w| w,
            3 => |w| w * w,
            4 => |_| 1,
            _ => return Err(WeightError::Complexity(level)),
        };

        Ok(Self::from_base(adjust))
    }

    fn from_base(adjust: fn(u32) -> u32) -> Self {
        let weights = Self::BASE.map(adjust);
        let dist = WeightedIndex::new(weights).expect("base weights are positive");
        Self { weights, dist }
    }

    /// The weight for a category.
    pub fn weight(&self, category: HandCategory) -> u32 {
        self.weights[category as usize]
    }

    /// Picks a random category.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> HandCategory {
        HandCategory::ALL[self.dist.sample(rng)]
    }
}

impl TryFrom<BTreeMap<HandCategory, u32>> for WeightTable {
    type Error = WeightError;

    fn try_from(map: BTreeMap<HandCategory, u32>) -> Result<Self, Self::Error> {
        let mut weights = [0; HandCategory::COUNT];
        for (category, weight) in map {
            weights[category as usize] = weight;
        }

        Self::new(weights)
    }
}

impl From<WeightTable> for BTreeMap<HandCategory, u32> {
    fn from(table: WeightTable) -> Self {
        HandCategory::categories()
            .map(|c| (c, table.weight(c)))
            .collect()
    }
}

/// Counts of generated hands by category.
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    counts: AHashMap<HandCategory, usize>,
    total: usize,
}

impl GenerationStats {
    /// Records a generated hand category.
    pub fn record(&mut self, category: HandCategory) {
        *self.counts.entry(category).or_default() += 1;
        self.total += 1;
    }

    /// The number of generated hands.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The number of generated hands for a category.
    pub fn count(&self, category: HandCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or_default()
    }

    /// Returns the categories with generated hands, their counts and
    /// percentages, from the strongest category.
    pub fn distribution(&self) -> Vec<(HandCategory, usize, f64)> {
        HandCategory::categories()
            .rev()
            .filter_map(|c| {
                let count = self.count(c);
                (count > 0).then(|| (c, count, count as f64 * 100.0 / self.total as f64))
            })
            .collect()
    }
}

/// A hands generator that picks categories from a weight table and keeps
/// generation stats.
#[derive(Debug, Clone)]
pub struct HandGenerator {
    weights: WeightTable,
    stats: GenerationStats,
}

impl HandGenerator {
    /// Creates a generator with the given weights.
    pub fn new(weights: WeightTable) -> Self {
        Self {
            weights,
            stats: GenerationStats::default(),
        }
    }

    /// Generates the next hand.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hand, InvalidHand> {
        let hand = generate_weighted(&self.weights, rng)?;
        self.stats.record(hand.value().category());
        Ok(hand)
    }

    /// The generator weights.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// The generated hands stats.
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }
}
