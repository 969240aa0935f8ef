//! Display functions for command results

use super::formatters::{length_badge, score_label};
use crate::commands::{CheckReport, Verdict};
use colored::Colorize;

/// Print the result of checking a batch of words
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        report.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &report.entries {
        match &entry.verdict {
            Verdict::Accepted => println!(
                "  {} {}",
                "✓".green().bold(),
                entry.input.trim().to_lowercase().bright_white()
            ),
            Verdict::Rejected(rejection) => println!(
                "  {} {:<16} {} {}",
                "✗".red().bold(),
                entry.input.trim(),
                format!("{}:", rejection.title()).red(),
                rejection.message().bright_black()
            ),
            Verdict::Ignored => println!("  {} {}", "·".bright_black(), "(empty)".bright_black()),
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} ({} rejected)",
            score_label(report.score()),
            report.rejected_count()
        )
        .bold()
    );
    for word in &report.used_words {
        println!("  {} {word}", length_badge(word).cyan());
    }
}
