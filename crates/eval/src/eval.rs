// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice hand evaluator.
//!
//! A hand is ranked by grouping its faces by count, for example a full house
//! has a group of 3 and a group of 2 equal faces. Groupings are checked from
//! the strongest to the weakest rank so that each roll of five dice gets
//! exactly one rank.
use std::fmt;

use pokerdice_dice::{DiceError, Face, FaceCounts, Hand};

/// The rank of a poker dice hand from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// Five different faces that do not form a straight, with the highest face.
    HighestValue(Face),
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five faces in sequence, 1 to 5 or 2 to 6.
    Straight,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// All five faces equal.
    FiveOfAKind,
}

impl HandRank {
    /// Evaluates a five dice roll.
    ///
    /// The faces do not need to be sorted.
    pub fn eval(faces: &[Face; Hand::SIZE]) -> HandRank {
        let counts = faces.iter().copied().collect::<FaceCounts>();

        match counts.groups().as_slice() {
            [5] => HandRank::FiveOfAKind,
            [4, 1] => HandRank::FourOfAKind,
            [3, 2] => HandRank::FullHouse,
            [1, 1, 1, 1, 1] if Hand::from(*faces).is_sequence() => HandRank::Straight,
            [3, 1, 1] => HandRank::ThreeOfAKind,
            [2, 2, 1] => HandRank::TwoPair,
            [2, 1, 1, 1] => HandRank::OnePair,
            _ => HandRank::HighestValue(counts.highest().unwrap_or(Face::MAX)),
        }
    }

    /// Evaluates a hand, fails if the hand has pending dice.
    pub fn eval_hand(hand: &Hand) -> Result<HandRank, DiceError> {
        hand.faces().map(|faces| Self::eval(&faces))
    }

    /// The rank name without the highest face.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighestValue(_) => "Highest value",
            HandRank::OnePair => "One pair",
            HandRank::TwoPair => "Two pair",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::FullHouse => "Full house",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::FiveOfAKind => "Five of a kind",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRank::HighestValue(face) => write!(f, "{} {face}", self.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}
