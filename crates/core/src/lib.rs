// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice game types.
//!
//! A [Game] plays rounds of poker dice talking to the player through a
//! [Prompter], the [Console] prompter reads answers line by line from any
//! buffered reader and writes to any writer:
//!
//! ```
//! # use pokerdice_core::{Console, Game};
//! // Play one round keeping all dice.
//! let console = Console::new("y\n-1\nn\n".as_bytes(), Vec::new());
//! let mut game = Game::with_seed(console, 42);
//! game.run().unwrap();
//! assert_eq!(game.rounds(), 1);
//!
//! let output = String::from_utf8(game.into_prompter().into_output()).unwrap();
//! assert!(output.ends_with("Goodbye!\n"));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod console;
pub use console::{Console, PromptError, Prompter};
pub mod game;
pub use game::{Game, RoundResult};
pub mod reroll;
