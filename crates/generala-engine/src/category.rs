//! Scoring categories of the Generala scorecard.

use serde::{Deserialize, Serialize};

/// A scoring category on the scorecard.
///
/// The declaration order is the canonical scorecard order: it drives
/// score-sheet rows and selection-menu numbering everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Count of ones, one point each.
    Ones,
    /// Count of twos, two points each.
    Twos,
    /// Count of threes, three points each.
    Threes,
    /// Count of fours, four points each.
    Fours,
    /// Count of fives, five points each.
    Fives,
    /// Count of sixes, six points each.
    Sixes,
    /// The run 1-2-3-4-5 or 2-3-4-5-6.
    Straight,
    /// Two distinct values split two and three.
    FullHouse,
    /// Exactly four dice sharing a value.
    FourOfAKind,
    /// All five dice sharing a value.
    FiveOfAKind,
}

impl Category {
    /// Every category in canonical scorecard order.
    pub const ALL: [Category; 10] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Straight,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::FiveOfAKind,
    ];

    /// Number of categories on the scorecard.
    pub const COUNT: usize = Self::ALL.len();

    /// The stable identifier used in theme files.
    pub fn id(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Straight => "straight",
            Category::FullHouse => "full-house",
            Category::FourOfAKind => "four-of-a-kind",
            Category::FiveOfAKind => "five-of-a-kind",
        }
    }

    /// The die face a number category counts, or `None` for the
    /// combination categories.
    pub fn face_value(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            Category::Straight
            | Category::FullHouse
            | Category::FourOfAKind
            | Category::FiveOfAKind => None,
        }
    }

    /// Whether this is one of the four combination categories.
    pub fn is_special(self) -> bool {
        self.face_value().is_none()
    }

    /// Position in [`Category::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
