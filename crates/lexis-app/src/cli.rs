use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

/// Extract English words from text and look them up in an English-Vietnamese dictionary
#[derive(Debug, Parser)]
#[command(name = "lexis", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up every distinct word of a text
    Extract(ExtractArgs),
    /// Browse or clear saved extractions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Flashcard drill over a saved extraction
    Study {
        /// Record to study, newest when omitted
        id: Option<Uuid>,
    },
    /// Show or change display preferences
    Prefs(PrefsArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Text to extract from; read from stdin when neither this nor --file is given
    pub text: Vec<String>,
    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Look up this many words at once
    #[arg(short, long)]
    pub parallel: Option<usize>,
    /// Do not write the result to history
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List saved extractions, oldest first
    List,
    /// Show one extraction, newest when no id is given
    Show {
        id: Option<Uuid>,
        /// Step to the record before it
        #[arg(long, conflicts_with = "newer")]
        older: bool,
        /// Step to the record after it
        #[arg(long)]
        newer: bool,
    },
    /// Delete all saved extractions
    Clear,
}

#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[arg(long)]
    pub show_word: Option<bool>,
    #[arg(long)]
    pub show_vietnamese: Option<bool>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_extract_with_options() {
        let cli = Cli::parse_from(["lexis", "extract", "Cat", "cat,", "--parallel", "4", "--no-save"]);
        let Command::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.text, vec!["Cat", "cat,"]);
        assert_eq!(args.parallel, Some(4));
        assert!(args.no_save);
    }

    #[test]
    fn text_and_file_conflict() {
        let result = Cli::try_parse_from(["lexis", "extract", "hello", "--file", "in.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_prefs_toggles() {
        let cli = Cli::parse_from(["lexis", "prefs", "--show-word", "false"]);
        let Command::Prefs(args) = cli.command else {
            panic!("expected prefs");
        };
        assert_eq!(args.show_word, Some(false));
        assert_eq!(args.show_vietnamese, None);
    }
}
