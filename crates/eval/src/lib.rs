// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice hand evaluator.
//!
//! Ranks a five dice hand using the face counts of the hand, to evaluate a
//! hand use [HandRank::eval] with the hand faces:
//!
//! ```
//! # use pokerdice_eval::*;
//! let faces = [1, 1, 1, 4, 4].map(|v| Face::new(v).unwrap());
//! let rank = HandRank::eval(&faces);
//! assert_eq!(rank, HandRank::FullHouse);
//! assert_eq!(rank.to_string(), "Full house");
//! ```
//!
//! or [HandRank::eval_hand] for a [Hand] that may still have pending dice:
//!
//! ```
//! # use pokerdice_eval::*;
//! let hand = Hand::try_from([2u8, 3, 4, 5, 6]).unwrap();
//! assert_eq!(HandRank::eval_hand(&hand), Ok(HandRank::Straight));
//!
//! let hand = Hand::try_from([2u8, 3, 0, 5, 6]).unwrap();
//! assert!(HandRank::eval_hand(&hand).is_err());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::HandRank;

// Reexport dice types.
pub use pokerdice_dice::{DiceError, Die, Face, FaceCounts, Hand};
