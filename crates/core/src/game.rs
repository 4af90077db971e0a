// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice game.
use anyhow::{Context, Result};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use pokerdice_dice::Hand;
use pokerdice_eval::HandRank;

use crate::{console::Prompter, reroll};

/// The result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The final sorted hand.
    pub hand: Hand,
    /// The final hand rank.
    pub rank: HandRank,
}

/// A poker dice game.
#[derive(Debug)]
pub struct Game<P, R> {
    prompter: P,
    rng: R,
    rounds: usize,
}

impl<P: Prompter> Game<P, StdRng> {
    /// Creates a game with randomness seeded from the player seed.
    pub fn with_seed(prompter: P, seed: i64) -> Self {
        Self::new(prompter, StdRng::seed_from_u64(seed as u64))
    }
}

impl<P: Prompter, R: Rng> Game<P, R> {
    /// Creates a new game that rolls dice using `rng`.
    pub fn new(prompter: P, rng: R) -> Self {
        Self {
            prompter,
            rng,
            rounds: 0,
        }
    }

    /// Plays rounds until the player stops.
    pub fn run(&mut self) -> Result<()> {
        self.prompter.show("Welcome to the Poker Dice game!")?;
        self.prompter
            .show("Roll 5 dice and try to assemble the best poker hand.")?;

        let mut play = self.prompter.read_yes_no("Would you like to play [Y/N]? ")?;
        while play {
            self.prompter.show("")?;
            self.play_round()?;
            play = self
                .prompter
                .read_yes_no("Would you like to play again [Y/N]? ")?;
        }

        self.prompter.show("")?;
        self.prompter.show("Goodbye!")?;
        info!("Game ended after {} rounds", self.rounds);

        Ok(())
    }

    /// Plays a round: roll, select dice to re-roll, re-roll and rank the hand.
    pub fn play_round(&mut self) -> Result<RoundResult> {
        self.rounds += 1;

        let mut hand = Hand::default();
        hand.fill(&mut self.rng);

        let mut hand = reroll::select_rerolls(&mut self.prompter, hand)?;
        self.prompter.show("Keeping remaining dice...")?;
        self.prompter.show("Rerolling...")?;
        hand.fill(&mut self.rng);

        self.prompter.show(&format!("Your final roll: {hand}"))?;
        let rank = HandRank::eval_hand(&hand).context("Final roll has pending dice")?;
        self.prompter.show(&rank.to_string())?;

        info!("Round {} final roll {hand} {rank}", self.rounds);

        Ok(RoundResult { hand, rank })
    }

    /// The number of rounds played.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Consumes the game and returns its prompter.
    pub fn into_prompter(self) -> P {
        self.prompter
    }
}
