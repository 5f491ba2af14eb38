//! Mutable state of one in-progress match.

use crate::category::Category;
use crate::dice::{DICE_COUNT, Hand, UNROLLED};

/// Rolls granted at the start of every round.
pub const ROLLS_PER_ROUND: i8 = 3;

/// The scorecard and dice of a single match.
///
/// Created fresh per match by [`GameSession::new`] and mutated only
/// through the session; everything here is read-only to the outside.
/// Open categories are exactly the unscored scorecard entries, so the
/// two can never disagree.
///
/// [`GameSession::new`]: crate::session::GameSession::new
#[derive(Debug, Clone)]
pub struct GameState {
    scores: [Option<u32>; Category::COUNT],
    dice: Hand,
    rolls_remaining: i8,
    served_generala: bool,
}

impl GameState {
    pub(crate) fn new() -> Self {
        Self {
            scores: [None; Category::COUNT],
            dice: [UNROLLED; DICE_COUNT],
            rolls_remaining: ROLLS_PER_ROUND,
            served_generala: false,
        }
    }

    /// The current hand. All [`UNROLLED`] before the round's first roll.
    pub fn dice(&self) -> &Hand {
        &self.dice
    }

    /// Rolls left in the current round.
    ///
    /// Goes negative if a caller keeps rolling past zero; the engine
    /// does not guard against that contract violation.
    pub fn rolls_remaining(&self) -> i8 {
        self.rolls_remaining
    }

    /// Whether this round's first roll produced five equal dice.
    pub fn served_generala(&self) -> bool {
        self.served_generala
    }

    /// The recorded score for a category, if it has been scored.
    pub fn score(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    /// Whether a category is still open for scoring.
    pub fn is_open(&self, category: Category) -> bool {
        self.scores[category.index()].is_none()
    }

    /// Categories not yet scored, in canonical scorecard order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(|cat| self.is_open(*cat))
    }

    /// Sum of every recorded score. Open categories contribute nothing.
    pub fn total_score(&self) -> u32 {
        self.scores.iter().flatten().sum()
    }

    /// Install a freshly rolled hand, evaluating the served-generala
    /// flag on the round's first roll and spending one roll.
    pub(crate) fn apply_roll(&mut self, hand: Hand) {
        let rolls_before = self.rolls_remaining;
        self.dice = hand;
        if rolls_before == ROLLS_PER_ROUND {
            let first = self.dice[0];
            self.served_generala = self.dice.iter().all(|&face| face == first);
        }
        self.rolls_remaining -= 1;
    }

    /// Write a score and reset the round for the next one.
    pub(crate) fn record_score(&mut self, category: Category, points: u32) {
        self.scores[category.index()] = Some(points);
        self.dice = [UNROLLED; DICE_COUNT];
        self.rolls_remaining = ROLLS_PER_ROUND;
        self.served_generala = false;
    }
}
