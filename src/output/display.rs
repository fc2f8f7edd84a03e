//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::engine::{GameStatus, GuessResult};
use colored::Colorize;

/// Print the banner shown when a text game starts
pub fn print_welcome(host_cheating: bool, max_attempts: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle Host - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mode = if host_cheating {
        "adversarial (the host may change its mind)".bright_red()
    } else {
        "classic".bright_green()
    };
    println!("Mode: {mode}");
    println!("You have {max_attempts} attempts to find the five-letter word.");
    println!("Type :help for commands.\n");
}

/// Print the board after an accepted guess
pub fn print_guess_result(result: &GuessResult) {
    let Some(last) = result.guesses.last() else {
        return;
    };

    println!(
        "  {}  {}",
        colored_tiles(last, result.letter_statuses),
        pattern_to_emoji(result.letter_statuses)
    );
    println!(
        "  {}",
        format!("Attempt {}", result.guesses.len()).bright_black()
    );

    match result.status {
        GameStatus::Won => println!("\n{}\n", result.message.bright_green().bold()),
        GameStatus::Lost => println!("\n{}\n", result.message.red().bold()),
        GameStatus::New | GameStatus::InProgress => println!(),
    }
}

/// Print how a guess splits the word list
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} candidates, {} feedback buckets:",
        result.total_candidates,
        result.buckets.len()
    );

    for bucket in &result.buckets {
        let bar = create_progress_bar(bucket.size as f64, result.largest_bucket as f64, 20);
        println!(
            "   {} score {:>2}  [{}] {:4}  {}",
            bucket.pattern.to_emoji(),
            bucket.score,
            bar.green(),
            bucket.size,
            bucket.sample.join(" ").bright_black()
        );
    }

    println!(
        "\n🎭 Host answers {} leaving {} candidate{}",
        result.chosen.to_emoji(),
        result.survivors.to_string().bright_yellow().bold(),
        if result.survivors == 1 { "" } else { "s" }
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_games > 0 {
        result.games_won as f64 / result.total_games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Host:             {}",
        if result.host_cheating { "adversarial" } else { "classic" }
    );
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {} ({win_rate:.1}%)",
        result.games_won.to_string().green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution (won games):".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (&guess_count, &count) in counts {
        let pct = count as f64 / result.games_won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
