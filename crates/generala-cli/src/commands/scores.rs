use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use generala_engine::Leaderboard;

pub fn run(path: &Path, count: usize) -> Result<(), String> {
    let board = Leaderboard::new(path);
    let entries = board.top(count).map_err(|e| e.to_string())?;

    if entries.is_empty() {
        println!("  No scores recorded yet.");
        return Ok(());
    }

    println!("  {}", "Top Scores".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Player", "Score"]);
    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.name.clone(),
            entry.score.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
