//! Die sources and hand bookkeeping.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of dice in a hand.
pub const DICE_COUNT: usize = 5;

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// Sentinel face meaning "not yet rolled this round".
pub const UNROLLED: u8 = 0;

/// A hand of five dice. Faces are 1-6, or [`UNROLLED`] before the
/// round's first roll.
pub type Hand = [u8; DICE_COUNT];

/// A source of die faces.
///
/// Production play draws from [`RandomDice`]; tests substitute
/// [`ScriptedDice`] to pin down exact hands.
pub trait DieSource {
    /// Draw the next face. Random sources yield uniformly in 1-6.
    fn next_face(&mut self) -> u8;
}

/// A [`DieSource`] backed by [`StdRng`].
#[derive(Debug)]
pub struct RandomDice(StdRng);

impl RandomDice {
    /// Create a source seeded from the operating system.
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Create a deterministic source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for RandomDice {
    fn next_face(&mut self) -> u8 {
        self.0.random_range(1..=FACES)
    }
}

/// A [`DieSource`] that replays a fixed sequence of faces.
///
/// # Panics
///
/// Panics when asked for more faces than it was given.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }
}

impl DieSource for ScriptedDice {
    fn next_face(&mut self) -> u8 {
        self.faces.pop_front().expect("scripted dice exhausted")
    }
}

/// Occurrence count per face value, indexed by face. Index 0 collects
/// sentinel (unrolled) dice.
pub(crate) fn face_counts(hand: &Hand) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &face in hand {
        counts[usize::from(face)] += 1;
    }
    counts
}
