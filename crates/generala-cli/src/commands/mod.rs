pub mod play;
pub mod scores;
pub mod themes;

use std::path::Path;

use generala_engine::Theme;

/// Load a theme file and pick the active theme (always the first entry).
pub fn load_active_theme(path: &Path) -> Result<Theme, String> {
    let mut themes = generala_engine::load_themes(path).map_err(|e| e.to_string())?;
    // load_themes guarantees a non-empty list.
    Ok(themes.remove(0))
}
