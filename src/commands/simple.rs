//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is a submission unless it
//! starts with `:`, which marks a command.

use crate::dictionary::SpellChecker;
use crate::game::{GameSession, SubmitOutcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: SpellChecker>(session: &mut GameSession<'_, D>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the simple mode against arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D, R, W>(
    session: &mut GameSession<'_, D>,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    D: SpellChecker,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Spell words of four or more letters from the root word.")?;
    writeln!(out, "Commands: ':restart' for a new root word, ':quit' to exit\n")?;

    print_banner(session, &mut out)?;

    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":restart" | ":r" | ":new" => {
                session.restart();
                writeln!(out, "\n🔄 New game started!")?;
                print_banner(session, &mut out)?;
            }
            ":words" | ":w" => print_used_words(session, &mut out)?,
            cmd if cmd.starts_with(':') => {
                writeln!(out, "{}", format!("Unknown command '{cmd}'").yellow())?;
            }
            word => match session.submit_word(word) {
                Ok(SubmitOutcome::Accepted(word)) => {
                    writeln!(
                        out,
                        "{} {}  (score: {})",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        session.score()
                    )?;
                }
                Ok(SubmitOutcome::Ignored) => {}
                Err(rejection) => {
                    writeln!(
                        out,
                        "{} {}",
                        format!("✗ {}:", rejection.title()).red().bold(),
                        rejection.message()
                    )?;
                    session.dismiss_error();
                }
            },
        }
    }

    writeln!(out, "\n👋 Final score: {}. Thanks for playing!\n", session.score())?;
    Ok(())
}

fn print_banner<D: SpellChecker, W: Write>(
    session: &GameSession<'_, D>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        session.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

fn print_used_words<D: SpellChecker, W: Write>(
    session: &GameSession<'_, D>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Score: {}", session.score())?;
    for word in session.used_words() {
        writeln!(out, "  {} {word}", crate::output::formatters::length_badge(word))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{ENGLISH, WordListDictionary};
    use crate::wordlists::RootWordCatalog;
    use std::io::Cursor;

    fn play(lines: &str) -> (String, Vec<String>) {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let dictionary = WordListDictionary::new(ENGLISH, ["bored", "road", "board"]);
        let mut session = GameSession::with_root_word(&catalog, dictionary, "keyboard");

        let mut out = Vec::new();
        run_simple_with(&mut session, Cursor::new(lines.to_string()), &mut out).unwrap();

        (
            String::from_utf8(out).unwrap(),
            session.used_words().to_vec(),
        )
    }

    #[test]
    fn accepts_and_rejects_words() {
        let (output, used) = play("bored\nxyz\nbored\n:quit\n");

        assert_eq!(used, vec!["bored"]);
        assert!(output.contains("KEYBOARD"));
        assert!(output.contains("A short word:"));
        assert!(output.contains("Word used already:"));
        assert!(output.contains("Final score: 1"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (output, used) = play("road\n");
        assert_eq!(used, vec!["road"]);
        assert!(output.contains("Final score: 1"));
    }

    #[test]
    fn restart_clears_words() {
        let (output, used) = play("road\n:restart\n");
        assert!(used.is_empty());
        assert!(output.contains("New game started"));
        assert!(output.contains("Final score: 0"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (output, used) = play("\n   \nboard\n");
        assert_eq!(used, vec!["board"]);
        assert!(!output.contains('✗'));
    }

    #[test]
    fn unknown_command_is_reported() {
        let (output, _) = play(":dance\n");
        assert!(output.contains("Unknown command ':dance'"));
    }
}
