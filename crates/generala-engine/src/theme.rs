//! Theme definitions: die symbols, category names, and point overrides.
//!
//! Themes are a cosmetic and scoring overlay on top of the fixed base
//! rules. They load from a JSON file whose wire format keeps the
//! historical Spanish field names (`niveles`, `nombre`,
//! `simbolos_dados`, `categorias`, `puntos_especiales`).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::category::Category;
use crate::error::{EngineError, EngineResult};

/// Fixed point values for combination categories a theme leaves unset.
const DEFAULT_SPECIAL_POINTS: [(Category, u32); 4] = [
    (Category::Straight, 20),
    (Category::FullHouse, 30),
    (Category::FourOfAKind, 40),
    (Category::FiveOfAKind, 50),
];

/// A cosmetic and scoring overlay applied on top of the base rules.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Display label for the theme.
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "simbolos_dados")]
    dice_symbols: [String; 6],
    #[serde(rename = "categorias")]
    category_names: HashMap<Category, String>,
    #[serde(rename = "puntos_especiales", default)]
    special_overrides: HashMap<Category, u32>,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    niveles: Vec<Theme>,
}

impl Theme {
    /// The themed symbol for a die face.
    ///
    /// `face` must be 1-6; anything else is a caller contract violation
    /// and panics.
    pub fn die_symbol(&self, face: u8) -> &str {
        &self.dice_symbols[usize::from(face - 1)]
    }

    /// The display name for a category, falling back to its base id.
    pub fn category_name(&self, category: Category) -> &str {
        self.category_names
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.id())
    }

    /// The flat points a combination category awards under this theme.
    ///
    /// Returns the theme override when present, the fixed default
    /// otherwise. Number categories have no flat value and yield 0.
    pub fn special_points(&self, category: Category) -> u32 {
        if let Some(&points) = self.special_overrides.get(&category) {
            return points;
        }
        DEFAULT_SPECIAL_POINTS
            .iter()
            .find(|(cat, _)| *cat == category)
            .map_or(0, |&(_, points)| points)
    }
}

/// Load every theme from a JSON theme file.
///
/// Fails when the file is missing or unreadable, when it is not valid
/// JSON of the expected shape, or when its theme list is empty.
pub fn load_themes(path: &Path) -> EngineResult<Vec<Theme>> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::ThemeRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ThemeFile = serde_json::from_str(&text).map_err(|source| EngineError::ThemeParse {
        path: path.to_path_buf(),
        source,
    })?;
    if file.niveles.is_empty() {
        return Err(EngineError::NoThemes {
            path: path.to_path_buf(),
        });
    }
    Ok(file.niveles)
}
