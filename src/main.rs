//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{check_words, run_simple},
    dictionary::WordListDictionary,
    game::GameSession,
    logging::{LogConfig, LogTarget, init_logging},
    output::print_check_report,
    wordlists::{
        RootWordCatalog,
        sources::{load_catalog, load_dictionary},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word catalog: 'embedded' (default) or path to a newline-separated file
    #[arg(short, long, global = true, default_value = "embedded")]
    catalog: String,

    /// Dictionary: 'embedded' (default) or path to a word list (e.g. /usr/share/dict/words)
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Check words against a given root word and print the verdicts
    Check {
        /// The root word to spell from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the TUI, so they need a file there
    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Play) => LogTarget::Discard,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_target(target))
        .context("Failed to open log file")?;

    let catalog = load_catalog(&cli.catalog)?;
    let dictionary = load_dictionary(&cli.dictionary)?;

    match command {
        Commands::Play => run_play_command(&catalog, dictionary),
        Commands::Simple => run_simple_command(&catalog, dictionary),
        Commands::Check { root, words } => {
            run_check_command(&root, &words, &catalog, dictionary)
        }
    }
}

fn run_play_command(catalog: &RootWordCatalog, dictionary: WordListDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(GameSession::new(catalog, dictionary));
    run_tui(app)
}

fn run_simple_command(catalog: &RootWordCatalog, dictionary: WordListDictionary) -> Result<()> {
    let mut session = GameSession::new(catalog, dictionary);
    run_simple(&mut session).context("Simple mode I/O failed")
}

fn run_check_command(
    root: &str,
    words: &[String],
    catalog: &RootWordCatalog,
    dictionary: WordListDictionary,
) -> Result<()> {
    let report = check_words(root, words, catalog, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_check_report(&report);
    Ok(())
}
