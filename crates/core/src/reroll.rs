// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Re-roll selection.
//!
//! After the first roll the player picks the dice to roll again one index at
//! a time, the selection ends when the player enters [KEEP_REMAINING]. Picked
//! dice become pending and get their new values at the next [Hand::fill].
use log::debug;
use thiserror::Error;

use pokerdice_dice::Hand;

use crate::console::{PromptError, Prompter};

/// The answer that ends the selection.
pub const KEEP_REMAINING: i64 = -1;

const SELECT_PROMPT: &str = "Select a die to re-roll (-1 to keep remaining dice): ";

/// Re-roll selection errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RerollError {
    /// The player entered an index that is not a die position.
    #[error("Index must be between 0 and 4")]
    IndexOutOfRange(i64),
    /// The selection has already ended.
    #[error("Re-roll selection is closed")]
    SelectionClosed,
}

/// The selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The player can pick more dice.
    Open,
    /// The player has finished picking dice.
    Closed,
}

/// Tracks the dice picked for a re-roll.
#[derive(Debug)]
pub struct RerollSelector {
    hand: Hand,
    selection: Selection,
}

impl RerollSelector {
    /// Creates an open selection for a hand.
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            selection: Selection::Open,
        }
    }

    /// Handles a player answer.
    ///
    /// A die index marks that die for a re-roll, [KEEP_REMAINING] closes the
    /// selection, and any other value is rejected leaving the hand unchanged.
    pub fn select(&mut self, answer: i64) -> Result<Selection, RerollError> {
        if self.selection == Selection::Closed {
            return Err(RerollError::SelectionClosed);
        }

        match answer {
            KEEP_REMAINING => {
                self.selection = Selection::Closed;
                debug!("Keeping {}", self.hand);
            }
            idx if (0..Hand::SIZE as i64).contains(&idx) => {
                self.hand.mark_for_reroll(idx as usize);
                debug!("Die {idx} marked for re-roll");
            }
            idx => return Err(RerollError::IndexOutOfRange(idx)),
        }

        Ok(self.selection)
    }

    /// The current selection state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The hand with the picked dice pending.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Consumes the selector and returns the hand.
    pub fn into_hand(self) -> Hand {
        self.hand
    }
}

/// Asks the player which dice to re-roll until the player keeps the remaining
/// dice, returns the hand with the picked dice pending.
pub fn select_rerolls<P: Prompter>(prompter: &mut P, hand: Hand) -> Result<Hand, PromptError> {
    let mut selector = RerollSelector::new(hand);
    show_roll(prompter, selector.hand())?;

    loop {
        let answer = prompter.read_int(SELECT_PROMPT)?;
        match selector.select(answer) {
            Ok(Selection::Closed) => break,
            Ok(Selection::Open) => {}
            Err(e) => prompter.show(&format!("Error: {e}"))?,
        }

        show_roll(prompter, selector.hand())?;
    }

    Ok(selector.into_hand())
}

fn show_roll<P: Prompter>(prompter: &mut P, hand: &Hand) -> Result<(), PromptError> {
    prompter.show(&format!("Your current roll: {hand}"))
}
