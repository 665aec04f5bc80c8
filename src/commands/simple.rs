//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{DrawPolicy, Session};
use crate::output::display::{print_best_word, print_round_result};
use crate::wordlists::SetDictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &SetDictionary, policy: DrawPolicy) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Letter Draw - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make a word that reuses the four drawn letters:");
    println!("  - 3 points per drawn letter used (repeats count)");
    println!("  - +3 if the letters appear in draw order");
    println!("  - -1 per extra letter squeezed between them\n");
    println!("Commands: 'new' for a new draw, 'best' to reveal the best word, 'quit' to exit\n");

    let mut rng = rand::rng();
    let mut session = Session::with_random_draw(dictionary, policy, &mut rng);

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Draw: {}    Session score: {}",
            session.draw().to_string().bright_yellow().bold(),
            session.session_score().to_string().bright_cyan()
        );
        println!("────────────────────────────────────────────────────────────");

        let input = get_user_input("Your word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!(
                    "\n👋 Final score: {} over {} words\n",
                    session.session_score(),
                    session.rounds_played()
                );
                return Ok(());
            }
            "new" | "n" => {
                session.new_draw(&mut rng);
                println!("\n🔄 New draw!\n");
            }
            "best" | "b" => match session.best_solution() {
                Some(best) => print_best_word(best),
                None => println!("Dictionary is empty, no best word.\n"),
            },
            _ => {
                let result = session.submit(&input);
                print_round_result(result);
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like 'quit'
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
