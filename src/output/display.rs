//! Display functions for command results

use super::formatters::{
    create_progress_bar, daily_emoji, format_tiles, next_puzzle_now, par_message, pluralize,
    share_text,
};
use crate::commands::{BenchmarkResult, CheckResult, DailyReport, SeedReport};
use crate::core::RACK_SIZE;
use crate::dictionary::Lexicon;
use crate::session::{Game, Stats, is_magic_word};
use colored::Colorize;

fn yes_no(value: bool) -> colored::ColoredString {
    if value { "yes".green() } else { "no".red() }
}

/// Print the rack for a day
pub fn print_daily_report(report: &DailyReport, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {}",
        "SPELLSTACKS".bright_cyan().bold(),
        report.date.format("%b %-d, %Y").to_string().bright_yellow().bold(),
        daily_emoji(report.seed)
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for row in format_tiles(report.rack.letters(), |_| false) {
        println!("   {}", row.bright_white().bold());
    }

    println!("\n📊 {}", "Rack:".bright_cyan().bold());
    println!("   Seed:     {}", report.seed);
    println!("   Source:   {}", report.source_label());
    println!("   Vowels:   {}", report.vowels);
    if let Some(message) = par_message(report.par()) {
        println!("   {message}");
    }

    if reveal && let Some(words) = &report.covering_words {
        println!("\n🔑 {}", "Covering words:".bright_cyan().bold());
        for word in words {
            println!("   • {word}");
        }
    }
}

/// Print a date's seed
pub fn print_seed_report(report: &SeedReport) {
    println!("{} → {}", report.date, report.seed.to_string().bright_yellow().bold());
}

/// Print the result of a word check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", result.word.bright_yellow().bold());
    println!("   In dictionary:  {}", yes_no(result.valid));
    println!("   On the rack:    {}", yes_no(result.spellable));
    println!("   Points:         {}", result.points);
    if result.magic {
        println!("   {}", "✨ A magic word!".magenta().bold());
    }
    if result.playable() {
        println!("\n{}", "✅ Playable today".green().bold());
    } else {
        println!("\n{}", "❌ Not playable today".red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Start date:       {}", result.start);
    println!("   Days generated:   {}", result.days);
    println!(
        "   Word covers:      {}",
        result.word_racks.to_string().green()
    );
    println!(
        "   Fallbacks:        {} ({:.1}%)",
        result.fallback_racks.to_string().yellow(),
        result.fallback_rate()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.0}", result.racks_per_second);

    println!("\n🔤 {}", "Vowels per rack:".bright_cyan().bold());
    println!(
        "   Min {}  Max {}  Average {}",
        result.min_vowels,
        result.max_vowels,
        format!("{:.2}", result.average_vowels).bright_yellow().bold()
    );

    if !result.par_distribution.is_empty() {
        println!("\n📈 {}", "Words per cover:".bright_cyan().bold());
        for (&par, &count) in &result.par_distribution {
            let pct = count as f64 / result.days as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {par}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    println!("\n🔠 {}", "Most common letters:".bright_cyan().bold());
    let total: usize = result.letter_counts.iter().sum();
    for (letter, count) in result.letters_by_frequency().into_iter().take(10) {
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        println!("   {letter}: {count:7} ({pct:4.1}%)");
    }
}

/// Print the board: free tiles, current words and progress
pub fn print_board<L: Lexicon>(game: &Game<'_, L>) {
    println!("{}", "─".repeat(60).cyan());
    if game.is_done() {
        println!("{}", "Puzzle finished".bright_green().bold());
    } else {
        for row in format_tiles(game.rack().letters(), |i| game.is_used(i)) {
            println!("   {}", row.bright_white().bold());
        }
        println!(
            "\n   [{}] {} left",
            create_progress_bar(game.progress() * RACK_SIZE as f64, RACK_SIZE as f64, 18).cyan(),
            game.remaining()
        );
    }

    if !game.words().is_empty() {
        println!();
        for (i, played) in game.words().iter().enumerate() {
            let word = if is_magic_word(&played.word) {
                played.word.magenta().bold()
            } else {
                played.word.bright_white().bold()
            };
            println!("   {}. {word}", (i + 1).to_string().bright_black());
        }
    }

    if let Some(previous) = game.previous_words()
        && !game.is_done()
    {
        println!("\n   {} {}", "Last time:".bright_black(), previous.join(", "));
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the end-of-puzzle summary
pub fn print_completion<L: Lexicon>(game: &Game<'_, L>, stats: &Stats, par: Option<usize>) {
    let word_count = game.words().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    if game.all_used() {
        println!(
            "{}",
            format!("    ✨ All letters used in {}! ✨", pluralize(word_count, "word"))
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "    Finished with {} left over",
                pluralize(game.remaining(), "letter")
            )
            .yellow()
            .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n   Score:   {}", game.score().to_string().bright_yellow().bold());
    if let Some(message) = par_message(par) {
        println!("   {message}");
    }
    println!(
        "   Played {}  Streak {}  Best {}  Fewest {}",
        stats.played,
        stats.streak,
        stats.best,
        stats.fewest.map_or_else(|| "-".to_string(), |f| f.to_string())
    );

    if game.all_used() {
        println!("\n{}", share_text(word_count).bright_black());
    }
    println!("\n   {}", next_puzzle_now().bright_blue());
    println!();
}
