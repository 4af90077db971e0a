// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker dice definitions.
use log::debug;
use rand::prelude::*;
use std::fmt;
use thiserror::Error;

/// The number of dice in a hand.
const HAND_SIZE: usize = 5;

/// The number of faces on a die.
const FACES: usize = 6;

/// Dice errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiceError {
    /// A value that is neither a face nor the pending marker.
    #[error("Invalid die value {0}, expected a value between 0 and 6")]
    InvalidFace(u8),
    /// A die that is waiting for a roll.
    #[error("Die {0} has not been rolled")]
    PendingDie(usize),
}

/// A die face value between 1 and 6.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    /// The lowest face.
    pub const MIN: Face = Face(1);

    /// The highest face.
    pub const MAX: Face = Face(FACES as u8);

    /// Creates a face, returns `None` if the value is not between 1 and 6.
    pub fn new(value: u8) -> Option<Face> {
        (1..=FACES as u8).contains(&value).then_some(Face(value))
    }

    /// Rolls a die using the given random generator.
    pub fn roll<R: Rng>(rng: &mut R) -> Face {
        Face(rng.random_range(1..=FACES as u8))
    }

    /// The face integer value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns all faces from lowest to highest.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        (1..=FACES as u8).map(Face)
    }

    #[inline]
    fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// A die slot in a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Die {
    /// The die is waiting for a roll.
    #[default]
    Pending,
    /// The die has been rolled.
    Rolled(Face),
}

impl Die {
    /// The rolled face if any.
    pub fn face(&self) -> Option<Face> {
        match self {
            Die::Pending => None,
            Die::Rolled(face) => Some(*face),
        }
    }

    /// Checks if this die is waiting for a roll.
    pub fn is_pending(&self) -> bool {
        matches!(self, Die::Pending)
    }
}

impl TryFrom<u8> for Die {
    type Error = DiceError;

    /// A zero value is a pending die.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Die::Pending),
            v => Face::new(v)
                .map(Die::Rolled)
                .ok_or(DiceError::InvalidFace(v)),
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Die::Pending => write!(f, "0"),
            Die::Rolled(face) => write!(f, "{face}"),
        }
    }
}

/// A poker dice hand.
///
/// A hand has exactly five slots, after a [Hand::fill] all the slots are rolled
/// and sorted in ascending order. Slots become pending only after a call to
/// [Hand::mark_for_reroll] until the next fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand([Die; HAND_SIZE]);

impl Hand {
    /// The number of dice in a hand.
    pub const SIZE: usize = HAND_SIZE;

    /// Rolls all pending dice and sorts the hand.
    pub fn fill<R: Rng>(&mut self, rng: &mut R) {
        for die in self.0.iter_mut().filter(|d| d.is_pending()) {
            *die = Die::Rolled(Face::roll(rng));
        }

        self.0.sort_unstable();
        debug!("Filled hand {}", self);
    }

    /// Marks the die at the given position for a re-roll.
    ///
    /// Marking a die that is already pending has no effect.
    ///
    /// Panics if `idx >= Hand::SIZE`.
    pub fn mark_for_reroll(&mut self, idx: usize) {
        self.0[idx] = Die::Pending;
    }

    /// The hand dice.
    pub fn dice(&self) -> &[Die; HAND_SIZE] {
        &self.0
    }

    /// Checks if all dice have been rolled.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|d| !d.is_pending())
    }

    /// Returns the dice faces or an error with the first pending die position.
    pub fn faces(&self) -> Result<[Face; HAND_SIZE], DiceError> {
        let mut faces = [Face::MIN; HAND_SIZE];
        for (idx, (face, die)) in faces.iter_mut().zip(self.0).enumerate() {
            *face = die.face().ok_or(DiceError::PendingDie(idx))?;
        }

        Ok(faces)
    }

    /// Counts the rolled faces in this hand.
    pub fn counts(&self) -> FaceCounts {
        self.0.iter().filter_map(Die::face).collect()
    }

    /// Checks if a rolled die shows the given face.
    pub fn contains(&self, face: Face) -> bool {
        self.0.contains(&Die::Rolled(face))
    }

    /// Checks if the hand is complete and its faces form an unbroken sequence.
    pub fn is_sequence(&self) -> bool {
        match self.faces() {
            Ok(mut faces) => {
                faces.sort_unstable();
                faces.windows(2).all(|w| w[1].value() == w[0].value() + 1)
            }
            Err(_) => false,
        }
    }

    /// Calls the `f` closure for each of the 6^5 rolls of five dice.
    ///
    /// Rolls are ordered, the same multiset of faces is visited once for each
    /// of its permutations.
    pub fn for_each<F>(mut f: F)
    where
        F: FnMut(&[Face; HAND_SIZE]),
    {
        let total = FACES.pow(HAND_SIZE as u32);
        let mut faces = [Face::MIN; HAND_SIZE];

        for n in 0..total {
            let mut rem = n;
            for face in faces.iter_mut() {
                *face = Face((rem % FACES) as u8 + 1);
                rem /= FACES;
            }

            f(&faces);
        }
    }
}

impl From<[Face; HAND_SIZE]> for Hand {
    fn from(faces: [Face; HAND_SIZE]) -> Self {
        Self(faces.map(Die::Rolled))
    }
}

impl TryFrom<[u8; HAND_SIZE]> for Hand {
    type Error = DiceError;

    /// Zero values become pending dice, the hand is not sorted.
    fn try_from(values: [u8; HAND_SIZE]) -> Result<Self, Self::Error> {
        let mut dice = [Die::Pending; HAND_SIZE];
        for (die, value) in dice.iter_mut().zip(values) {
            *die = Die::try_from(value)?;
        }

        Ok(Self(dice))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, die) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{die}")?;
        }
        write!(f, "]")
    }
}

/// The number of dice showing each face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; FACES]);

impl FaceCounts {
    /// The number of dice showing a face.
    pub fn count(&self, face: Face) -> u8 {
        self.0[face.index()]
    }

    /// The number of counted dice.
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Iterates faces with their counts from lowest to highest face.
    pub fn iter(&self) -> impl Iterator<Item = (Face, u8)> {
        Face::faces().zip(self.0)
    }

    /// The non zero counts from largest to smallest.
    ///
    /// For example a full house gives `[3, 2]` and a two pair `[2, 2, 1]`.
    pub fn groups(&self) -> Vec<u8> {
        let mut groups = self.0.iter().copied().filter(|&c| c > 0).collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        groups
    }

    /// The highest counted face.
    pub fn highest(&self) -> Option<Face> {
        Face::faces().rev().find(|face| self.count(*face) > 0)
    }
}

impl FromIterator<Face> for FaceCounts {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut counts = FaceCounts::default();
        for face in iter {
            counts.0[face.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn hand(values: [u8; 5]) -> Hand {
        Hand::try_from(values).unwrap()
    }

    fn face(value: u8) -> Face {
        Face::new(value).unwrap()
    }

    #[test]
    fn face_range() {
        assert!(Face::new(0).is_none());
        assert!(Face::new(7).is_none());
        assert_eq!(Face::faces().count(), 6);
        assert_eq!(Face::faces().next(), Some(Face::MIN));
        assert_eq!(Face::faces().last(), Some(Face::MAX));
    }

    #[test]
    fn face_roll() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut seen = HashSet::default();

        for _ in 0..10_000 {
            let face = Face::roll(&mut rng);
            assert!((1..=6).contains(&face.value()));
            seen.insert(face);
        }

        // All faces should show up in 10k rolls.
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn fill_empty_hand() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut hand = Hand::default();
        assert!(hand.dice().iter().all(Die::is_pending));

        hand.fill(&mut rng);
        assert!(hand.is_complete());
        assert!(hand.dice().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(hand.counts().total(), 5);
    }

    #[test]
    fn fill_keeps_rolled_dice() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut h = hand([0, 6, 0, 1, 0]);

        h.fill(&mut rng);
        assert!(h.is_complete());
        assert!(h.contains(face(6)));
        assert!(h.contains(face(1)));
        assert_eq!(h.dice()[0], Die::Rolled(face(1)));
        assert_eq!(h.dice()[4], Die::Rolled(face(6)));

        // A complete hand is only sorted and doesn't consume randomness.
        let mut sorted = hand([5, 4, 3, 2, 1]);
        sorted.fill(&mut rng);
        assert_eq!(sorted, hand([1, 2, 3, 4, 5]));
    }

    #[test]
    fn fill_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let mut h1 = Hand::default();
            let mut h2 = Hand::default();
            h1.fill(&mut rng1);
            h2.fill(&mut rng2);
            assert_eq!(h1, h2);
        }
    }

    #[test]
    fn mark_for_reroll() {
        let mut h = hand([1, 2, 3, 4, 5]);
        h.mark_for_reroll(0);
        assert_eq!(h, hand([0, 2, 3, 4, 5]));
        assert!(!h.is_complete());

        // Marking again is a no-op.
        h.mark_for_reroll(0);
        assert_eq!(h, hand([0, 2, 3, 4, 5]));

        h.mark_for_reroll(4);
        assert_eq!(h.to_string(), "[0, 2, 3, 4, 0]");
    }

    #[test]
    fn hand_conversions() {
        assert_eq!(Hand::try_from([1u8, 2, 7, 4, 5]), Err(DiceError::InvalidFace(7)));
        assert_eq!(hand([0, 0, 0, 0, 0]), Hand::default());

        let h = hand([3, 1, 4, 1, 5]);
        assert_eq!(h.to_string(), "[3, 1, 4, 1, 5]");
        assert_eq!(
            h.faces().unwrap(),
            [face(3), face(1), face(4), face(1), face(5)]
        );
        assert_eq!(Hand::from(h.faces().unwrap()), h);

        let h = hand([2, 2, 0, 3, 0]);
        assert_eq!(h.faces(), Err(DiceError::PendingDie(2)));
    }

    #[test]
    fn face_counts() {
        let counts = hand([1, 2, 3, 3, 5]).counts();
        let values = counts.iter().map(|(_, c)| c).collect::<Vec<_>>();
        assert_eq!(values, vec![1, 1, 2, 0, 1, 0]);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.groups(), vec![2, 1, 1, 1]);
        assert_eq!(counts.highest(), Some(face(5)));

        assert_eq!(hand([1, 1, 1, 4, 4]).counts().groups(), vec![3, 2]);
        assert_eq!(hand([6, 6, 6, 6, 6]).counts().groups(), vec![5]);

        // Pending dice are not counted.
        let counts = hand([0, 2, 2, 0, 4]).counts();
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.count(face(2)), 2);
        assert_eq!(FaceCounts::default().highest(), None);
    }

    #[test]
    fn hand_sequence() {
        assert!(hand([1, 2, 3, 4, 5]).is_sequence());
        assert!(hand([6, 5, 4, 3, 2]).is_sequence());
        assert!(!hand([1, 2, 3, 4, 6]).is_sequence());
        assert!(!hand([1, 1, 2, 3, 4]).is_sequence());
        assert!(!hand([0, 2, 3, 4, 5]).is_sequence());
    }

    #[test]
    fn hand_for_each() {
        let mut count = 0;
        let mut hands = HashSet::default();

        Hand::for_each(|faces| {
            count += 1;
            let mut faces = *faces;
            faces.sort_unstable();
            hands.insert(faces);
        });

        assert_eq!(count, 7_776);

        // Number of 5 dice multisets.
        assert_eq!(hands.len(), 252);
    }
}
