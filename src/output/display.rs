//! Display functions for command results

use super::formatters::{format_letters, format_parts, score_bar, skeleton_marker};
use crate::commands::{BenchmarkResult, BestReport};
use crate::core::ScoreResult;
use crate::game::{BestWord, RoundResult};
use colored::{ColoredString, Colorize};

/// Color a word: skeleton letters green, insertions red, the rest dimmed
#[must_use]
pub fn highlight_word(word: &str, skeleton: &[usize]) -> String {
    let span = skeleton.first().zip(skeleton.last());

    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            let letter = ch.to_string();
            let styled: ColoredString = if skeleton.contains(&i) {
                letter.bright_green().bold()
            } else if span.is_some_and(|(&first, &last)| (first..=last).contains(&i)) {
                letter.red()
            } else {
                letter.bright_black()
            };
            styled.to_string()
        })
        .collect()
}

/// Print a score breakdown
pub fn print_score_breakdown(score: &ScoreResult) {
    println!(
        "   Word:        {}",
        highlight_word(&score.word, &score.skeleton_indices)
    );
    let marker = skeleton_marker(&score.word, &score.skeleton_indices);
    if !marker.is_empty() {
        println!("                {}", marker.bright_black());
    }
    println!(
        "   Letters:     {} ({}/{})",
        format_letters(&score.used_letters),
        score.used_letters.len(),
        score.draw.len()
    );
    println!(
        "   Order bonus: {}",
        if score.order_bonus {
            "yes".green()
        } else {
            "no".bright_black()
        }
    );
    println!("   Insertions:  {}", score.insertions);
    println!("   Breakdown:   {}", format_parts(&score.parts));
    println!(
        "   Total:       [{}] {}",
        score_bar(score.total, 15).green(),
        score.total.to_string().bright_yellow().bold()
    );
}

/// Print the result of playing a word
pub fn print_round_result(result: &RoundResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Draw {}  ·  Word {}",
        result.draw.to_string().bright_yellow().bold(),
        result.raw_word.bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    match (result.score(), result.invalid_reason()) {
        (Some(score), _) => print_score_breakdown(score),
        (None, Some(reason)) => {
            println!(
                "{}",
                format!("❌ Invalid word: {}", reason.describe()).red().bold()
            );
        }
        (None, None) => {}
    }
    println!();
}

/// Print a best word with its breakdown
pub fn print_best_word(best: &BestWord) {
    println!(
        "\n🏆 Best word: {} ({} points)",
        best.word.to_uppercase().bright_yellow().bold(),
        best.total()
    );
    print_score_breakdown(&best.score);
    println!();
}

/// Print the result of a best-word search
pub fn print_best_result(report: &BestReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BEST WORD FOR".bright_cyan().bold(),
        report.draw.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 Searched {} words in {:.1}ms",
        report.candidates,
        report.duration.as_secs_f64() * 1000.0
    );

    match &report.best {
        Some(best) => print_best_word(best),
        None => println!("{}", "No words to search.".red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Best words:".bright_cyan().bold());
    println!("   Draws tested:     {}", result.total_draws);
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!(
        "   Average best:     {}",
        format!("{:.2}", result.average_best).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.max_best).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.min_best).yellow()
    );
    println!("   Perfect draws:    {}", result.perfect_draws);
    if let Some((draw, total)) = result.hardest_draw {
        println!("   Hardest draw:     {draw} ({total})");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Draws/second:     {:.1}", result.draws_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&total, &count) in result.distribution.iter().rev() {
        let pct = (count as f64 / result.total_draws as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {total:>3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
