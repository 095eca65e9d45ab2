//! kotonote - Personal Japanese/Korean sentence notebook

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kotonote_core::{AppConfig, Backend, NotebookSession};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kotonote",
    version,
    about = "Personal Japanese/Korean sentence notebook",
    long_about = "A sentence notebook for language study: record Japanese/Korean\n\
                  sentence pairs, browse and prune the list, and drill yourself\n\
                  with a random quiz.\n\
                  \n\
                  The notebook lives in a local JSON file by default, or in a\n\
                  remote sheet configured in <home>/config.json.\n\
                  \n\
                  Examples:\n\
                    kotonote                         # Run the TUI (default)\n\
                    kotonote add 雨が降っています 비가 와요\n\
                    kotonote list                    # Print the notebook\n\
                    kotonote list --json             # Machine-readable output\n\
                    kotonote remove 3                # Delete row 3 (as shown by list)\n\
                    kotonote quiz                    # One random sentence\n\
                    kotonote quiz --reveal           # ...with the answer\n\
                  \n\
                  Environment Variables:\n\
                    KOTONOTE_HOME                    # Override home directory (~/.kotonote)\n\
                    KOTONOTE_DATA_FILE               # Use a specific local JSON file\n\
                    KOTONOTE_NO_COLOR                # Disable ANSI colors"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to the kotonote home directory (default: ~/.kotonote)
    #[arg(long, env = "KOTONOTE_HOME")]
    home: Option<PathBuf>,

    /// Use this local JSON file, ignoring the configured backend
    #[arg(long, env = "KOTONOTE_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "KOTONOTE_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the TUI (default)
    Tui,
    /// Add one sentence pair and exit
    Add {
        /// Sentence in the language being studied
        source: String,
        /// Meaning in your language
        target: String,
    },
    /// Print the notebook
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete one row
    Remove {
        /// Row number as shown by `kotonote list` (starts at 1)
        position: usize,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Print one random sentence
    Quiz {
        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let home = match &args.home {
        Some(home) => home.clone(),
        None => AppConfig::default_home().context("Could not determine home directory")?,
    };

    let mut config = AppConfig::load(&home);
    if let Some(path) = &args.data_file {
        config.backend = Backend::File {
            path: Some(path.clone()),
        };
    }

    let mode = args.mode.unwrap_or(Mode::Tui);

    // The TUI owns the terminal; logging goes to stderr only for the
    // non-interactive commands
    if !matches!(mode, Mode::Tui) {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("kotonote=warn".parse().expect("static directive")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match mode {
        Mode::Tui => run_tui(config, &home).await,
        Mode::Add { source, target } => run_add(config, &home, &source, &target).await,
        Mode::List { json } => run_list(config, &home, json, args.no_color).await,
        Mode::Remove { position, yes } => run_remove(config, &home, position, yes).await,
        Mode::Quiz { reveal } => run_quiz(config, &home, reveal).await,
    }
}

async fn open_session(config: &AppConfig, home: &std::path::Path) -> Result<NotebookSession> {
    let store = config
        .open_store(home)
        .await
        .context("Failed to open the backing store")?;
    Ok(NotebookSession::new(store))
}

async fn run_tui(config: AppConfig, home: &std::path::Path) -> Result<()> {
    let session = open_session(&config, home).await?;
    kotonote_tui::run(session, config.color_scheme).await
}

async fn run_add(
    config: AppConfig,
    home: &std::path::Path,
    source: &str,
    target: &str,
) -> Result<()> {
    let mut session = open_session(&config, home).await?;

    session
        .add(source, target)
        .await
        .context("Could not save the sentence")?;

    println!("Saved: {}  ·  {}", source.trim(), target.trim());
    println!("The notebook now has {} sentences.", session.len());
    Ok(())
}

async fn run_list(
    config: AppConfig,
    home: &std::path::Path,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let mut session = open_session(&config, home).await?;
    let entries = session
        .entries()
        .await
        .context("Could not read the notebook")?;

    println!("{}", cli::format_sentence_table(entries, json, no_color));
    Ok(())
}

async fn run_remove(
    config: AppConfig,
    home: &std::path::Path,
    position: usize,
    yes: bool,
) -> Result<()> {
    let mut session = open_session(&config, home).await?;
    let entries = session
        .entries()
        .await
        .context("Could not read the notebook")?;

    let index = cli::parse_display_position(position, entries.len())
        .map_err(anyhow::Error::msg)?;
    let preview = entries[index].record.source_text.clone();

    if !yes {
        let prompt = format!("Delete \"{preview}\"?");
        let stdin = std::io::stdin();
        if !cli::confirm_removal(&prompt, &mut stdin.lock(), &mut std::io::stderr()) {
            println!("Kept.");
            return Ok(());
        }
    }

    let removed = session
        .remove_at(index)
        .await
        .context("Could not delete the sentence")?;

    println!("Deleted: {}  ·  {}", removed.source_text, removed.target_text);
    println!("{} sentences remain.", session.len());
    Ok(())
}

async fn run_quiz(config: AppConfig, home: &std::path::Path, reveal: bool) -> Result<()> {
    let mut session = open_session(&config, home).await?;
    session
        .entries()
        .await
        .context("Could not read the notebook")?;

    let Some(entry) = session.pick_random(&mut rand::rng()) else {
        println!("The notebook is empty; add a sentence first.");
        return Ok(());
    };

    println!("{}", entry.record.source_text);
    if reveal {
        println!("→ {}", entry.record.target_text);
    } else {
        println!("(run with --reveal to see the answer)");
    }
    Ok(())
}
