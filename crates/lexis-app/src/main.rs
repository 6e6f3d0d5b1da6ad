use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;
use lexis_config::Config;
use lexis_core::error::NO_WORDS_MESSAGE;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod render;
pub mod state;
pub mod study;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command, ExtractArgs, HistoryAction, PrefsArgs};
use self::controller::AppController;
use self::state::AppState;

const DEFAULT_LOG_FILTER: &str =
    "warn,lexis_app=info,lexis_core=info,lexis_lang_english=info,lexis_store=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let state = AppState::new(Config::new());

    match cli.command {
        Command::Extract(args) => extract(&state, args).await,
        Command::History { action } => history(&state, action),
        Command::Study { id } => study(&state, id),
        Command::Prefs(args) => prefs(&state, args),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn extract(state: &AppState, args: ExtractArgs) -> anyhow::Result<()> {
    let text = match (&args.file, args.text.is_empty()) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, false) => args.text.join(" "),
        (None, true) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let ctx = state.lookup_context(args.parallel)?;
    let history = if args.no_save {
        lexis_store::HistoryStore::in_memory()
    } else {
        state.open_history()?
    };
    let prefs = state.load_preferences()?;

    let mut controller = AppController::new(ctx, history);
    let view = controller.extract_and_translate(&text).await;
    tracing::debug!("Submitted {} chars", view.input_text.len());

    if let Some(error) = view.error {
        anyhow::bail!(error);
    }
    if view.no_words {
        println!("No Words Found. {NO_WORDS_MESSAGE}");
        return Ok(());
    }
    if let Some(page) = view.data {
        print!("{}", render::page(&page, &prefs));
    }
    Ok(())
}

fn history(state: &AppState, action: HistoryAction) -> anyhow::Result<()> {
    let store = state.open_history()?;
    let prefs = state.load_preferences()?;
    let ctx = state.lookup_context(None)?;
    let mut controller = AppController::new(ctx, store);

    match action {
        HistoryAction::List => {
            if controller.history().is_empty() {
                println!("History is empty.");
            }
            for record in controller.history() {
                println!("{}", render::record_summary(record));
            }
        }
        HistoryAction::Show { id, older, newer } => {
            if let Some(id) = id {
                controller
                    .seek(id)
                    .with_context(|| format!("Record not found: {id}"))?;
            }

            let page = if older {
                controller.previous_page()
            } else if newer {
                controller.next_page()
            } else {
                controller.current_page()
            };

            match page {
                Some(page) => print!("{}", render::page(&page, &prefs)),
                None => println!("No such record."),
            }
        }
        HistoryAction::Clear => {
            controller.clear_history()?;
            println!("History cleared.");
        }
    }

    Ok(())
}

fn study(state: &AppState, id: Option<uuid::Uuid>) -> anyhow::Result<()> {
    let store = state.open_history()?;
    let record = match id {
        Some(id) => store.get(id)?,
        None => store.latest().context("History is empty, extract some text first")?,
    };

    let stdin = io::stdin();
    let score = study::run(
        record.output.clone(),
        state.config.study.prompt_meanings,
        &mut rand::rng(),
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;
    tracing::info!("Study session ended with score {score}");
    Ok(())
}

fn prefs(state: &AppState, args: PrefsArgs) -> anyhow::Result<()> {
    let mut prefs = state.load_preferences()?;

    if args.show_word.is_some() || args.show_vietnamese.is_some() {
        if let Some(show) = args.show_word {
            prefs.show_word = show;
        }
        if let Some(show) = args.show_vietnamese {
            prefs.show_vietnamese = show;
        }
        state.save_preferences(&prefs)?;
    }

    println!("show-word: {}", prefs.show_word);
    println!("show-vietnamese: {}", prefs.show_vietnamese);
    Ok(())
}
