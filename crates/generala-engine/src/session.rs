//! Round orchestration: rolling, served-generala detection, and score
//! assignment.

use crate::category::Category;
use crate::dice::{DICE_COUNT, DieSource, Hand, UNROLLED};
use crate::error::{EngineError, EngineResult};
use crate::score::score_for_category;
use crate::state::{GameState, ROLLS_PER_ROUND};
use crate::theme::Theme;

/// Points a generala served on the round's first roll is worth.
pub const SERVED_GENERALA_POINTS: u32 = 1000;

/// What a session is waiting for next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The round's dice have not been rolled yet.
    AwaitingFirstRoll,
    /// At least one roll happened and rerolls remain.
    AwaitingReroll,
    /// No rolls remain; a category must be chosen.
    AwaitingCategory,
    /// Every category is scored, or a served generala won the match.
    MatchOver,
}

/// One match of Generala.
///
/// Owns the [`GameState`] and the die source and is the only way to
/// mutate the state. Presentation layers read through [`state`] and
/// drive the match through [`roll`] and [`assign_category`].
///
/// [`state`]: GameSession::state
/// [`roll`]: GameSession::roll
/// [`assign_category`]: GameSession::assign_category
#[derive(Debug)]
pub struct GameSession<D> {
    state: GameState,
    dice: D,
    served_win: bool,
}

impl<D: DieSource> GameSession<D> {
    /// Start a fresh match drawing faces from `dice`.
    pub fn new(dice: D) -> Self {
        Self {
            state: GameState::new(),
            dice,
            served_win: false,
        }
    }

    /// Read-only view of the match state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// What the session expects next.
    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::MatchOver
        } else if self.state.rolls_remaining() == ROLLS_PER_ROUND {
            Phase::AwaitingFirstRoll
        } else if self.state.rolls_remaining() > 0 {
            Phase::AwaitingReroll
        } else {
            Phase::AwaitingCategory
        }
    }

    /// Roll the dice, keeping the positions listed in `keep`.
    ///
    /// Positions are 0-4; anything out of range is ignored. On the
    /// round's first roll the served-generala flag is re-evaluated from
    /// the resulting hand. Rolling with no rolls remaining is a caller
    /// contract violation: the counter keeps decrementing below zero
    /// while the dice keep being redrawn.
    pub fn roll(&mut self, keep: &[usize]) {
        let mut hand: Hand = [UNROLLED; DICE_COUNT];
        for (position, slot) in hand.iter_mut().enumerate() {
            *slot = if keep.contains(&position) {
                self.state.dice()[position]
            } else {
                self.dice.next_face()
            };
        }
        self.state.apply_roll(hand);
    }

    /// Possible points for every open category with the current hand,
    /// in canonical scorecard order. Scored categories are omitted.
    pub fn possible_scores(&self, theme: &Theme) -> Vec<(Category, u32)> {
        self.state
            .open_categories()
            .map(|cat| (cat, score_for_category(self.state.dice(), cat, theme)))
            .collect()
    }

    /// Score the current hand into `category` and reset for the next
    /// round, returning the awarded points.
    ///
    /// A served generala scored into five of a kind awards the fixed
    /// bonus regardless of the current dice and wins the match
    /// outright. Fails with [`EngineError::CategoryNotOpen`], leaving
    /// the state untouched, when the category is already scored.
    pub fn assign_category(&mut self, category: Category, theme: &Theme) -> EngineResult<u32> {
        if !self.state.is_open(category) {
            return Err(EngineError::CategoryNotOpen(category));
        }
        let points = if category == Category::FiveOfAKind && self.state.served_generala() {
            self.served_win = true;
            SERVED_GENERALA_POINTS
        } else {
            score_for_category(self.state.dice(), category, theme)
        };
        self.state.record_score(category, points);
        Ok(points)
    }

    /// Sum of every scored category.
    pub fn total_score(&self) -> u32 {
        self.state.total_score()
    }

    /// Whether the match has ended: the scorecard is full, or a served
    /// generala was scored and won immediately.
    pub fn is_over(&self) -> bool {
        self.served_win || self.state.open_categories().next().is_none()
    }

    /// Whether the match ended by scoring a served generala.
    pub fn served_win(&self) -> bool {
        self.served_win
    }

    /// The score the match counts for: the fixed bonus for a
    /// served-generala win, the scorecard total otherwise.
    pub fn final_score(&self) -> u32 {
        if self.served_win {
            SERVED_GENERALA_POINTS
        } else {
            self.total_score()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn theme() -> Theme {
        serde_json::from_str(
            r#"{
                "nombre": "Test",
                "simbolos_dados": ["1", "2", "3", "4", "5", "6"],
                "categorias": {},
                "puntos_especiales": {"five-of-a-kind": 50}
            }"#,
        )
        .unwrap()
    }

    fn session(faces: impl IntoIterator<Item = u8>) -> GameSession<ScriptedDice> {
        GameSession::new(ScriptedDice::new(faces))
    }

    #[test]
    fn roll_replaces_unkept_dice() {
        let mut session = session([1, 2, 3, 4, 5, 6, 6]);
        session.roll(&[]);
        assert_eq!(session.state().dice(), &[1, 2, 3, 4, 5]);
        session.roll(&[0, 1, 2]);
        assert_eq!(session.state().dice(), &[1, 2, 3, 6, 6]);
        assert_eq!(session.state().rolls_remaining(), 1);
    }

    #[test]
    fn out_of_range_keep_positions_are_ignored() {
        let mut session = session([1, 2, 3, 4, 5, 6, 6, 6, 6]);
        session.roll(&[]);
        session.roll(&[4, 9, 100]);
        assert_eq!(session.state().dice(), &[6, 6, 6, 6, 5]);
    }

    #[test]
    fn served_generala_end_to_end() {
        let theme = theme();
        let mut session = session([6, 6, 6, 6, 6]);
        session.roll(&[]);
        assert!(session.state().served_generala());

        let points = session.assign_category(Category::FiveOfAKind, &theme).unwrap();
        // The bonus applies no matter what the theme says the category
        // is worth.
        assert_eq!(points, SERVED_GENERALA_POINTS);
        assert!(session.is_over());
        assert!(session.served_win());
        assert_eq!(session.final_score(), SERVED_GENERALA_POINTS);
        assert_eq!(session.phase(), Phase::MatchOver);
    }

    #[test]
    fn served_win_caps_final_score_at_the_bonus() {
        let theme = theme();
        let mut session = session([2, 2, 2, 2, 3, 6, 6, 6, 6, 6]);
        session.roll(&[]);
        session.assign_category(Category::Twos, &theme).unwrap();

        session.roll(&[]);
        session.assign_category(Category::FiveOfAKind, &theme).unwrap();

        // The scorecard holds 8 + 1000, but a served win always counts
        // exactly the bonus.
        assert_eq!(session.total_score(), 1008);
        assert_eq!(session.final_score(), SERVED_GENERALA_POINTS);
        assert!(session.is_over());
    }

    #[test]
    fn five_of_a_kind_without_serving_pays_theme_points() {
        let theme = theme();
        let mut session = session([6, 6, 6, 6, 5, 6]);
        session.roll(&[]);
        assert!(!session.state().served_generala());
        session.roll(&[0, 1, 2, 3]);
        let points = session.assign_category(Category::FiveOfAKind, &theme).unwrap();
        assert_eq!(points, 50);
        assert!(!session.served_win());
        assert!(!session.is_over());
    }

    #[test]
    fn served_flag_survives_rerolls_until_scored() {
        let theme = theme();
        let mut session = session([3, 3, 3, 3, 3, 1, 2]);
        session.roll(&[]);
        assert!(session.state().served_generala());
        session.roll(&[0, 1, 2]);
        assert!(session.state().served_generala());

        // Scoring a different category clears the flag without the bonus.
        let points = session.assign_category(Category::Threes, &theme).unwrap();
        assert_eq!(points, 9);
        assert!(!session.state().served_generala());
        assert!(!session.served_win());
    }

    #[test]
    fn assignment_resets_the_round() {
        let theme = theme();
        let mut session = session([1, 2, 3, 4, 5]);
        session.roll(&[]);
        session.assign_category(Category::Straight, &theme).unwrap();
        assert_eq!(session.state().rolls_remaining(), ROLLS_PER_ROUND);
        assert_eq!(session.state().dice(), &[UNROLLED; DICE_COUNT]);
        assert!(!session.state().served_generala());
        assert!(!session.state().is_open(Category::Straight));
        assert_eq!(session.phase(), Phase::AwaitingFirstRoll);
    }

    #[test]
    fn scored_category_cannot_be_scored_again() {
        let theme = theme();
        let mut session = session([1, 2, 3, 4, 5, 1, 1, 2, 2, 2]);
        session.roll(&[]);
        session.assign_category(Category::Ones, &theme).unwrap();

        session.roll(&[]);
        let before = session.state().clone();
        let err = session.assign_category(Category::Ones, &theme).unwrap_err();
        assert!(matches!(err, EngineError::CategoryNotOpen(Category::Ones)));
        // The failed assignment left everything untouched.
        assert_eq!(session.state().dice(), before.dice());
        assert_eq!(session.state().rolls_remaining(), before.rolls_remaining());
        assert_eq!(session.total_score(), before.total_score());
        assert!(session.state().is_open(Category::Twos));
    }

    #[test]
    fn possible_scores_cover_open_categories_in_order() {
        let theme = theme();
        let mut session = session([3, 3, 3, 5, 5, 1, 1, 1, 1, 1]);
        session.roll(&[]);
        session.assign_category(Category::FullHouse, &theme).unwrap();

        session.roll(&[]);
        let possible = session.possible_scores(&theme);
        assert_eq!(possible.len(), 9);
        assert_eq!(possible[0], (Category::Ones, 5));
        assert!(possible.iter().all(|(cat, _)| *cat != Category::FullHouse));
        // Canonical order is preserved.
        let cats: Vec<Category> = possible.iter().map(|(cat, _)| *cat).collect();
        let expected: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| *c != Category::FullHouse)
            .collect();
        assert_eq!(cats, expected);
    }

    #[test]
    fn phases_follow_the_round() {
        let theme = theme();
        let mut session = session([1, 2, 3, 4, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(session.phase(), Phase::AwaitingFirstRoll);
        session.roll(&[]);
        assert_eq!(session.phase(), Phase::AwaitingReroll);
        session.roll(&[]);
        assert_eq!(session.phase(), Phase::AwaitingReroll);
        session.roll(&[]);
        assert_eq!(session.phase(), Phase::AwaitingCategory);
        session.assign_category(Category::Ones, &theme).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingFirstRoll);
    }

    #[test]
    fn rolling_past_zero_goes_negative() {
        // Caller contract violation, preserved as-is: the counter keeps
        // dropping and the dice keep being redrawn.
        let mut session = session([1; 20]);
        for _ in 0..4 {
            session.roll(&[]);
        }
        assert_eq!(session.state().rolls_remaining(), -1);
    }

    #[test]
    fn full_match_totals_add_up() {
        let theme = theme();
        let mut session = session([1u8, 2, 3, 4, 5].into_iter().cycle().take(50));
        let mut awarded = Vec::new();
        for cat in Category::ALL {
            assert!(!session.is_over());
            session.roll(&[]);
            awarded.push(session.assign_category(cat, &theme).unwrap());
        }
        assert!(session.is_over());
        assert_eq!(session.phase(), Phase::MatchOver);
        assert_eq!(session.state().open_categories().count(), 0);
        assert_eq!(session.total_score(), awarded.iter().sum::<u32>());
        assert_eq!(session.final_score(), session.total_score());
        // [1,2,3,4,5] every round: 1+2+3+4+5 on numbers, straight 20,
        // nothing else.
        assert_eq!(session.total_score(), 35);
    }
}
