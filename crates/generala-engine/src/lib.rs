//! Rules engine for a themed five-dice Generala game.
//!
//! Manages the round state machine (roll, keep, reroll), detects
//! combinations, scores categories under a data-driven theme, and
//! persists final scores to a flat-file leaderboard. Presentation is
//! left entirely to the caller: a frontend drives a [`GameSession`],
//! renders its [`GameState`], and records the final score on a
//! [`Leaderboard`].

pub mod category;
pub mod dice;
pub mod error;
pub mod leaderboard;
pub mod score;
pub mod session;
pub mod state;
pub mod theme;

pub use category::Category;
pub use dice::{DICE_COUNT, DieSource, FACES, Hand, RandomDice, ScriptedDice, UNROLLED};
pub use error::{EngineError, EngineResult};
pub use leaderboard::{Leaderboard, ScoreEntry};
pub use score::{
    is_five_of_a_kind, is_four_of_a_kind, is_full_house, is_straight, score_for_category,
};
pub use session::{GameSession, Phase, SERVED_GENERALA_POINTS};
pub use state::{GameState, ROLLS_PER_ROUND};
pub use theme::{Theme, load_themes};
