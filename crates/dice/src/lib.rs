// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice types.
//!
//! This crate defines the types to roll a poker dice hand, a [Face] is a die
//! value between 1 and 6 and a [Hand] holds five [Die] slots that are either
//! rolled or pending a roll:
//!
//! ```
//! # use pokerdice_dice::{Face, Hand};
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut hand = Hand::default();
//! assert!(!hand.is_complete());
//!
//! hand.fill(&mut rng);
//! assert!(hand.is_complete());
//! assert_eq!(hand.counts().total(), 5);
//! ```
//!
//! Dice are marked for a re-roll and then filled again, filling sorts the hand:
//!
//! ```
//! # use pokerdice_dice::Hand;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut hand = Hand::try_from([1u8, 2, 3, 4, 5]).unwrap();
//! hand.mark_for_reroll(0);
//! assert_eq!(hand.to_string(), "[0, 2, 3, 4, 5]");
//!
//! hand.fill(&mut rng);
//! assert!(hand.is_complete());
//! ```
//!
//! To iterate through all the 7776 rolls of five dice:
//!
//! ```
//! # use pokerdice_dice::Hand;
//! let mut counter = 0;
//! Hand::for_each(|faces| {
//!     assert_eq!(faces.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 7776);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod dice;
pub use dice::{DiceError, Die, Face, FaceCounts, Hand};
