use std::io::{self, BufRead, Write as _};
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use generala_engine::{
    Category, DICE_COUNT, DieSource, GameSession, Leaderboard, Phase, RandomDice, Theme, UNROLLED,
};

pub fn run(theme_path: &Path, scores_path: &Path, seed: Option<u64>) -> Result<(), String> {
    let theme = super::load_active_theme(theme_path)?;
    let board = Leaderboard::new(scores_path);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!();
    println!(
        "  {} {}",
        "Generala".bold(),
        format!("— playing theme '{}'", theme.name).dimmed()
    );

    loop {
        let session = match seed {
            Some(seed) => GameSession::new(RandomDice::seeded(seed)),
            None => GameSession::new(RandomDice::new()),
        };
        if !play_match(session, &theme, &board, &mut input)? {
            return Ok(());
        }
        if !ask_yes(&mut input, "Play another match? [y/N] ")? {
            return Ok(());
        }
    }
}

/// Drive one match to its end. Returns false when the player quits
/// mid-match (nothing is recorded in that case).
fn play_match<D: DieSource>(
    mut session: GameSession<D>,
    theme: &Theme,
    board: &Leaderboard,
    input: &mut impl BufRead,
) -> Result<bool, String> {
    while !session.is_over() {
        println!();
        println!("  {}", "--- New round ---".bold());
        session.roll(&[]);

        if session.state().served_generala() && session.state().is_open(Category::FiveOfAKind) {
            print_sheet(&session, theme);
            print_dice(&session, theme);
            let points = session
                .assign_category(Category::FiveOfAKind, theme)
                .map_err(|e| e.to_string())?;
            println!();
            println!("  {}", "SERVED GENERALA! An outright win!".green().bold());
            println!(
                "  Scored {points} points in '{}'.",
                theme.category_name(Category::FiveOfAKind)
            );
            continue;
        }

        while session.phase() == Phase::AwaitingReroll {
            print_sheet(&session, theme);
            print_dice(&session, theme);
            let command = read_line(input, "ENTER to roll again, 'q' to leave the match: ")?;
            if command.eq_ignore_ascii_case("q") {
                println!("  Leaving the match.");
                return Ok(false);
            }
            let keep = read_line(input, "Dice to keep (1-5, comma separated, ENTER for none): ")?;
            session.roll(&parse_keep(&keep));
        }

        print_sheet(&session, theme);
        print_dice(&session, theme);
        let category = choose_category(&session, theme, input)?;
        let points = session
            .assign_category(category, theme)
            .map_err(|e| e.to_string())?;
        println!(
            "  Scored {points} points in '{}'.",
            theme.category_name(category)
        );
    }

    let total = session.final_score();
    println!();
    println!("  {}", "=== Match over ===".bold());
    print_sheet(&session, theme);
    println!("  Final score: {}", total.to_string().bold());

    let name = read_line(input, "Name for the scoreboard: ")?;
    let name = if name.is_empty() { "Anonymous" } else { &name };
    board.record(name, total).map_err(|e| e.to_string())?;
    println!("  Score saved to {}.", board.path().display());
    Ok(true)
}

fn choose_category<D: DieSource>(
    session: &GameSession<D>,
    theme: &Theme,
    input: &mut impl BufRead,
) -> Result<Category, String> {
    let possible = session.possible_scores(theme);
    println!();
    println!("  {}", "Possible plays".bold().underline());
    for (i, (category, points)) in possible.iter().enumerate() {
        println!(
            "  {:>2}) {:<24} {:>4} pts",
            i + 1,
            theme.category_name(*category),
            points
        );
    }
    loop {
        let text = read_line(input, "Category number to score: ")?;
        if let Ok(choice) = text.parse::<usize>()
            && (1..=possible.len()).contains(&choice)
        {
            return Ok(possible[choice - 1].0);
        }
        println!("  Invalid choice.");
    }
}

/// Parse 1-based dice positions; anything unparseable is dropped.
fn parse_keep(text: &str) -> Vec<usize> {
    text.split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .filter(|position| (1..=DICE_COUNT).contains(position))
        .map(|position| position - 1)
        .collect()
}

fn print_sheet<D: DieSource>(session: &GameSession<D>, theme: &Theme) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Points"]);
    for category in Category::ALL {
        let points = match session.state().score(category) {
            Some(points) => points.to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![theme.category_name(category).to_string(), points]);
    }
    table.add_row(vec!["TOTAL".to_string(), session.total_score().to_string()]);
    println!("{table}");
}

fn print_dice<D: DieSource>(session: &GameSession<D>, theme: &Theme) {
    let hand = session.state().dice();
    let values: Vec<String> = hand.iter().map(u8::to_string).collect();
    let symbols: Vec<String> = hand
        .iter()
        .map(|&face| {
            if face == UNROLLED {
                "?".to_string()
            } else {
                theme.die_symbol(face).to_string()
            }
        })
        .collect();
    println!("  Dice : {}", values.join("  ").bold());
    println!("  Theme: {}", symbols.join(" | "));
    println!("  Rolls left: {}", session.state().rolls_remaining());
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("unexpected end of input".to_string());
    }
    Ok(line.trim().to_string())
}

fn ask_yes(input: &mut impl BufRead, prompt: &str) -> Result<bool, String> {
    Ok(read_line(input, prompt)?.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_positions_are_one_based() {
        assert_eq!(parse_keep("1,3,5"), vec![0, 2, 4]);
        assert_eq!(parse_keep(" 2 , 4 "), vec![1, 3]);
    }

    #[test]
    fn keep_drops_garbage_and_out_of_range() {
        assert_eq!(parse_keep(""), Vec::<usize>::new());
        assert_eq!(parse_keep("0,6,99"), Vec::<usize>::new());
        assert_eq!(parse_keep("a,2,!"), vec![1]);
    }
}
