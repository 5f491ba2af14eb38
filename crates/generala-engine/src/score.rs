//! Combination detection and category scoring.
//!
//! All functions here are pure and total: a hand that does not meet a
//! category's combination simply scores zero, it never fails.

use crate::category::Category;
use crate::dice::{Hand, face_counts};
use crate::theme::Theme;

/// True when the hand is the run 1-2-3-4-5 or 2-3-4-5-6.
///
/// No other five values count; duplicates never form a straight.
pub fn is_straight(hand: &Hand) -> bool {
    let mut sorted = *hand;
    sorted.sort_unstable();
    sorted == [1, 2, 3, 4, 5] || sorted == [2, 3, 4, 5, 6]
}

/// True when exactly two values are present, split two and three.
pub fn is_full_house(hand: &Hand) -> bool {
    let counts = face_counts(hand);
    counts.contains(&2) && counts.contains(&3)
}

/// True when exactly four dice share a value.
///
/// Five equal dice are five of a kind, not four of a kind.
pub fn is_four_of_a_kind(hand: &Hand) -> bool {
    face_counts(hand).contains(&4)
}

/// True when all five dice share a value.
pub fn is_five_of_a_kind(hand: &Hand) -> bool {
    face_counts(hand).contains(&5)
}

/// Points the hand is worth in a category under the given theme.
///
/// Number categories score `count(face) * face`. Combination categories
/// score the theme's flat value when their combination is met, zero
/// otherwise.
pub fn score_for_category(hand: &Hand, category: Category, theme: &Theme) -> u32 {
    if let Some(face) = category.face_value() {
        let count = hand.iter().filter(|&&f| f == face).count() as u32;
        return count * u32::from(face);
    }
    let met = match category {
        Category::Straight => is_straight(hand),
        Category::FullHouse => is_full_house(hand),
        Category::FourOfAKind => is_four_of_a_kind(hand),
        Category::FiveOfAKind => is_five_of_a_kind(hand),
        _ => false,
    };
    if met { theme.special_points(category) } else { 0 }
}
