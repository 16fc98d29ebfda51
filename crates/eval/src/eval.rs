// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! [classify] maps a five cards hand to a [HandValue], that is the hand
//! [HandCategory] and the ranks needed to break ties between hands of the same
//! category. [best_of] picks the best five cards hand out of a larger set of
//! cards, for example for seven cards variants.
//!
//! A straight from ace to five (the wheel) is a five high straight, so it loses
//! against any other straight.
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Write};
use thiserror::Error;

use handdrill_cards::{Card, Rank, subset::for_each_ksubset};

use crate::HandCategory;

/// Ranks bits for the A-2-3-4-5 straight.
const WHEEL_BITS: u16 = (1 << Rank::Ace as u16) | 0b1111;

/// Error returned for a malformed hand.
///
/// This is always the result of a caller bug, an invalid hand is never
/// produced by a deck or by the hand generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHand {
    /// A hand with the wrong number of cards.
    #[error("a hand has {expected} cards, got {actual}")]
    Count {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards passed in.
        actual: usize,
    },
    /// Not enough cards to pick a hand from.
    #[error("need at least 5 cards, got {actual}")]
    TooFewCards {
        /// The number of cards passed in.
        actual: usize,
    },
    /// The same card shows up more than once.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

/// A five cards poker hand with no duplicate cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, fails if there are duplicate cards.
    pub fn new(cards: [Card; Hand::SIZE]) -> Result<Self, InvalidHand> {
        check_distinct(&cards)?;
        Ok(Self(cards))
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }

    /// Classifies this hand.
    pub fn value(&self) -> HandValue {
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut rank_bits = 0u16;

        for card in &self.0 {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
            rank_bits |= 1 << card.rank() as u16;
        }

        // Ranks grouped by multiplicity, larger groups first and higher ranks
        // first within groups of the same size.
        let mut groups = [(0u8, Rank::Deuce); Hand::SIZE];
        let mut n = 0;
        for rank in Rank::ranks().rev() {
            let count = rank_counts[rank as usize];
            if count > 0 {
                groups[n] = (count, rank);
                n += 1;
            }
        }

        groups[..n].sort_by(|a, b| b.0.cmp(&a.0));
        let groups = &groups[..n];
        let ranks = || groups.iter().map(|&(_, r)| r);

        let is_flush = suit_counts.contains(&5);
        let straight = straight_high(rank_bits);
        let (top, second) = (groups[0].0, groups.get(1).map_or(0, |g| g.0));

        match straight {
            Some(Rank::Ace) if is_flush => HandValue::new(HandCategory::RoyalFlush, [Rank::Ace]),
            Some(high) if is_flush => HandValue::new(HandCategory::StraightFlush, [high]),
            _ if top == 4 => HandValue::new(HandCategory::FourOfAKind, ranks()),
            _ if top == 3 && second == 2 => HandValue::new(HandCategory::FullHouse, ranks()),
            _ if is_flush => HandValue::new(HandCategory::Flush, ranks()),
            Some(high) => HandValue::new(HandCategory::Straight, [high]),
            None if top == 3 => HandValue::new(HandCategory::ThreeOfAKind, ranks()),
            None if top == 2 && second == 2 => HandValue::new(HandCategory::TwoPair, ranks()),
            None if top == 2 => HandValue::new(HandCategory::OnePair, ranks()),
            None => HandValue::new(HandCategory::HighCard, ranks()),
        }
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = InvalidHand;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards).map_err(|_| InvalidHand::Count {
            expected: Hand::SIZE,
            actual: cards.len(),
        })?;

        Hand::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = InvalidHand;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_from(cards.as_slice())
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_char(' ')?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// A hand category and its tiebreak ranks.
///
/// Values are ordered by category first and then by the tiebreak ranks in
/// descending significance, so that comparing two values compares the hands
/// strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    category: HandCategory,
    ranks: [Rank; Hand::SIZE],
    len: u8,
}

impl HandValue {
    fn new(category: HandCategory, tiebreak: impl IntoIterator<Item = Rank>) -> Self {
        let mut ranks = [Rank::Deuce; Hand::SIZE];
        let mut len = 0;
        for (slot, rank) in ranks.iter_mut().zip(tiebreak) {
            *slot = rank;
            len += 1;
        }

        Self {
            category,
            ranks,
            len,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks used to break ties between hands of the same category.
    ///
    /// - Straights and straight flushes: the high card, five for the wheel.
    /// - Four of a kind: the quads rank and the kicker.
    /// - Full house: the trips rank and the pair rank.
    /// - Three of a kind: the trips rank and the two kickers.
    /// - Two pair: the high pair, the low pair and the kicker.
    /// - One pair: the pair rank and the three kickers.
    /// - Flush and high card: all five ranks.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (idx, rank) in self.tiebreak().iter().enumerate() {
            if idx > 0 {
                f.write_char(' ')?;
            }

            write!(f, "{rank}")?;
        }

        f.write_char(')')
    }
}

/// Classifies a five cards hand.
///
/// Fails if there are not exactly five cards or if there are duplicates.
pub fn classify(cards: &[Card]) -> Result<HandValue, InvalidHand> {
    Hand::try_from(cards).map(|hand| hand.value())
}

/// Returns the best five cards hand out of five or more cards.
///
/// All five cards subsets are evaluated, the first subset with the highest
/// value is returned.
pub fn best_of(cards: &[Card]) -> Result<(HandValue, Hand), InvalidHand> {
    if cards.len() < Hand::SIZE {
        return Err(InvalidHand::TooFewCards {
            actual: cards.len(),
        });
    }

    check_distinct(cards)?;

    let mut best: Option<(HandValue, Hand)> = None;
    let mut h = [cards[0]; Hand::SIZE];
    for_each_ksubset(cards.len(), Hand::SIZE, |p| {
        for (idx, &pos) in p.iter().enumerate() {
            h[idx] = cards[pos];
        }

        let hand = Hand(h);
        let value = hand.value();
        if best.is_none_or(|(v, _)| value > v) {
            best = Some((value, hand));
        }
    });

    best.ok_or(InvalidHand::TooFewCards {
        actual: cards.len(),
    })
}

/// Returns the straight high card for a set of rank bits.
pub(crate) fn straight_high(rank_bits: u16) -> Option<Rank> {
    Rank::ranks()
        .rev()
        .take_while(|&r| r >= Rank::Six)
        .find(|&high| {
            let bits = 0b11111 << (high as u16 - 4);
            rank_bits & bits == bits
        })
        .or_else(|| (rank_bits & WHEEL_BITS == WHEEL_BITS).then_some(Rank::Five))
}

fn check_distinct(cards: &[Card]) -> Result<(), InvalidHand> {
    let mut seen = 0u64;
    for &card in cards {
        let bit = 1u64 << card.id();
        if seen & bit != 0 {
            return Err(InvalidHand::Duplicate(card));
        }

        seen |= bit;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use handdrill_cards::{Deck, Suit};
    use rand::{SeedableRng, rngs::SmallRng};
    use serde::de::{IntoDeserializer, value};

    fn deserialize_hand(ids: Vec<u8>) -> Result<Hand, value::Error> {
        let de: value::SeqDeserializer<_, value::Error> = ids.into_deserializer();
        Hand::deserialize(de)
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn value(s: &str) -> HandValue {
        classify(&cards(s)).unwrap()
    }

    fn category(s: &str) -> HandCategory {
        value(s).category()
    }

    #[test]
    fn royal_flush_precedence() {
        assert_eq!(category("TS JS QS KS AS"), HandCategory::RoyalFlush);
        assert_eq!(category("AH KH QH JH TH"), HandCategory::RoyalFlush);
        assert_eq!(category("9S TS JS QS KS"), HandCategory::StraightFlush);

        // Same ranks not suited is a plain straight.
        assert_eq!(category("TS JS QS KS AH"), HandCategory::Straight);
    }

    #[test]
    fn ace_low_straight() {
        let v = value("AH 2D 3C 4S 5H");
        assert_eq!(v.category(), HandCategory::Straight);
        assert_eq!(v.tiebreak(), [Rank::Five]);

        let v = value("AH 2H 3H 4H 5H");
        assert_eq!(v.category(), HandCategory::StraightFlush);
        assert_eq!(v.tiebreak(), [Rank::Five]);

        // No wrap around straights.
        assert_eq!(category("QH KD AC 2S 3H"), HandCategory::HighCard);
        assert_eq!(category("KH AD 2C 3S 4H"), HandCategory::HighCard);
    }

    #[test]
    fn four_of_a_kind_over_full_house() {
        let v = value("8H 8D 8C 8S KH");
        assert_eq!(v.category(), HandCategory::FourOfAKind);
        assert_eq!(v.tiebreak(), [Rank::Eight, Rank::King]);

        let v = value("KH 8D KC 8S KS");
        assert_eq!(v.category(), HandCategory::FullHouse);
        assert_eq!(v.tiebreak(), [Rank::King, Rank::Eight]);

        let v = value("2H AD 2C AS AH");
        assert_eq!(v.category(), HandCategory::FullHouse);
        assert_eq!(v.tiebreak(), [Rank::Ace, Rank::Deuce]);
    }

    #[test]
    fn flush_over_straight() {
        let v = value("2H 4H 6H 8H TH");
        assert_eq!(v.category(), HandCategory::Flush);
        assert_eq!(
            v.tiebreak(),
            [Rank::Ten, Rank::Eight, Rank::Six, Rank::Four, Rank::Deuce]
        );

        assert_eq!(category("5C 6D 7H 8S 9C"), HandCategory::Straight);
    }

    #[test]
    fn pairs_and_trips() {
        let v = value("7H 7D 7C KS 2H");
        assert_eq!(v.category(), HandCategory::ThreeOfAKind);
        assert_eq!(v.tiebreak(), [Rank::Seven, Rank::King, Rank::Deuce]);

        let v = value("7H 7D KC KS 2H");
        assert_eq!(v.category(), HandCategory::TwoPair);
        assert_eq!(v.tiebreak(), [Rank::King, Rank::Seven, Rank::Deuce]);

        let v = value("7H 7D AC KS 2H");
        assert_eq!(v.category(), HandCategory::OnePair);
        assert_eq!(v.tiebreak(), [Rank::Seven, Rank::Ace, Rank::King, Rank::Deuce]);

        let v = value("7H 9D AC KS 2H");
        assert_eq!(v.category(), HandCategory::HighCard);
        assert_eq!(
            v.tiebreak(),
            [Rank::Ace, Rank::King, Rank::Nine, Rank::Seven, Rank::Deuce]
        );
    }

    #[test]
    fn tiebreak_order() {
        // Wheel is the lowest straight.
        assert!(value("AH 2D 3C 4S 5H") < value("2H 3D 4C 5S 6H"));
        assert!(value("TH JD QC KS AH") > value("9H TD JC QS KH"));

        // Kickers.
        assert!(value("7H 7D AC KS 2H") > value("7C 7S AD QS JH"));
        assert!(value("7H 7D KC KS 2H") < value("7C 7S KD KH 3H"));
        assert!(value("8H 8D 8C 8S 2H") > value("7C 7S 7D 7H AH"));

        // Category dominates ranks.
        assert!(value("2H 3H 4H 5H 6H") > value("AH AD AC AS KH"));
        assert!(value("2H 3H 4H 5H 7H") > value("AH AD AC KS QH"));
        assert!(value("2H 2D 3C 3S 3H") > value("AH KH QH JH 9H"));
        assert!(value("2H 2D 3C 4S 5H") > value("AH KD QC JS 9H"));

        // Suits do not matter.
        assert_eq!(value("7H 7D KC KS 2H"), value("7C 7S KD KH 2C"));
    }

    #[test]
    fn invalid_hands() {
        assert_eq!(
            classify(&cards("AH KH QH JH")),
            Err(InvalidHand::Count {
                expected: 5,
                actual: 4
            })
        );

        assert_eq!(
            classify(&cards("AH KH QH JH TH 9H")),
            Err(InvalidHand::Count {
                expected: 5,
                actual: 6
            })
        );

        assert_eq!(
            classify(&cards("AH KH QH JH AH")),
            Err(InvalidHand::Duplicate(Card::new(Rank::Ace, Suit::Hearts)))
        );

        assert_eq!(
            best_of(&cards("AH KH QH JH")),
            Err(InvalidHand::TooFewCards { actual: 4 })
        );

        assert_eq!(
            best_of(&cards("AH KH QH JH TH 2C 2C")),
            Err(InvalidHand::Duplicate(Card::new(Rank::Deuce, Suit::Clubs)))
        );
    }

    #[test]
    fn hand_serde_validation() {
        let hand = Hand::try_from(cards("AH KH QH JH TH")).unwrap();
        assert_eq!(hand.to_string(), "AH KH QH JH TH");
        assert_eq!(Vec::from(hand).len(), 5);

        assert!(Hand::try_from(cards("AH KH QH JH JH")).is_err());

        let hand = deserialize_hand(vec![0, 1, 2, 3, 51]).unwrap();
        assert_eq!(hand.to_string(), "2C 2D 2H 2S AS");

        // Card ids out of range and duplicates are rejected.
        assert!(deserialize_hand(vec![0, 1, 2, 3, 60]).is_err());
        assert!(deserialize_hand(vec![0, 1, 2, 3, 200]).is_err());
        assert!(deserialize_hand(vec![0, 1, 2, 3, 3]).is_err());
        assert!(deserialize_hand(vec![0, 1, 2, 3]).is_err());
    }

    #[test]
    fn best_of_seven() {
        let (v, hand) = best_of(&cards("2C 7D AH KH QH JH TH")).unwrap();
        assert_eq!(v.category(), HandCategory::RoyalFlush);
        assert_eq!(hand.value(), v);

        let (v, _) = best_of(&cards("AS 2D 3C 4S 5H KD KC")).unwrap();
        assert_eq!(v.category(), HandCategory::Straight);
        assert_eq!(v.tiebreak(), [Rank::Five]);

        let (v, _) = best_of(&cards("9S 9D 9C 4S 4H 4D 2C")).unwrap();
        assert_eq!(v.category(), HandCategory::FullHouse);
        assert_eq!(v.tiebreak(), [Rank::Nine, Rank::Four]);

        let (v, _) = best_of(&cards("9S 9D 7C 7S 4H 4D 2C")).unwrap();
        assert_eq!(v.category(), HandCategory::TwoPair);
        assert_eq!(v.tiebreak(), [Rank::Nine, Rank::Seven, Rank::Four]);

        // Five cards is the single subset case.
        let five = cards("8H 8D 8C 8S KH");
        let (v, hand) = best_of(&five).unwrap();
        assert_eq!(Some(v), classify(&five).ok());
        assert_eq!(hand.cards().as_slice(), five.as_slice());
    }

    #[test]
    fn best_of_monotonicity() {
        let deck = Deck::default();
        let mut rng = SmallRng::seed_from_u64(11);
        deck.sample(&mut rng, 500, 7, |seven| {
            let (best, hand) = best_of(seven).unwrap();
            assert_eq!(hand.value(), best);
            assert!(hand.cards().iter().all(|c| seven.contains(c)));

            for_each_ksubset(7, 5, |p| {
                let sub = p.iter().map(|&i| seven[i]).collect::<Vec<_>>();
                let v = classify(&sub).unwrap();
                assert!(best >= v);
                assert!(best.category() >= v.category());
            });
        });
    }

    #[test]
    fn classify_all_hands() {
        let mut counts = [0usize; HandCategory::COUNT];
        Deck::default().for_each(5, |hand| {
            let v = classify(hand).unwrap();
            counts[v.category() as usize] += 1;
        });

        let expected = [
            1_302_540, // high card
            1_098_240, // one pair
            123_552,   // two pair
            54_912,    // three of a kind
            10_200,    // straight
            5_108,     // flush
            3_744,     // full house
            624,       // four of a kind
            36,        // straight flush
            4,         // royal flush
        ];

        assert_eq!(counts, expected);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}
