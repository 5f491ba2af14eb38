use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use generala_engine::{Category, load_themes};

pub fn run(path: &Path) -> Result<(), String> {
    let themes = load_themes(path).map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Theme", "Die faces", "Specials"]);
    for theme in &themes {
        let faces: Vec<String> = (1..=6u8)
            .map(|face| theme.die_symbol(face).to_string())
            .collect();
        let specials: Vec<String> = Category::ALL
            .into_iter()
            .filter(|category| category.is_special())
            .map(|category| {
                format!(
                    "{} ({})",
                    theme.category_name(category),
                    theme.special_points(category)
                )
            })
            .collect();
        table.add_row(vec![
            theme.name.clone(),
            faces.join(" "),
            specials.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}
