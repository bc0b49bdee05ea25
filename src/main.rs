//! # Glint - Lexical Syntax Highlighter
//!
//! Renders source files as highlighted HTML line lists.
//!
//! ## Quick Start
//!
//! ```bash
//! # Render the built-in C++ sample
//! cargo run -- render
//!
//! # Render a file, language detected from its extension
//! cargo run -- render path/to/main.cpp
//!
//! # Dump tokens as JSON
//! cargo run -- tokens path/to/main.c --language c
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glint_core::{Config, Editor, EditorOptions};
use glint_syntax::{tokenize, Language, Token, TokenType};

/// Shown when `render` or `tokens` get no file.
const SAMPLE: &str = "#include <iostream>\n\nint main() {\n\tstd::cout << \"Hello World!\";\n\treturn 0;\n}\n";

/// Glint - lexical syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the highlighted HTML line list
    Render(Source),
    /// Print the token stream as JSON
    Tokens(Source),
    /// List supported language ids
    Languages,
}

#[derive(clap::Args, Debug)]
struct Source {
    /// File to read (the built-in sample when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Language id; detected from the file extension when omitted
    #[arg(short, long, value_name = "ID")]
    language: Option<String>,
}

/// A token as printed by `tokens`.
#[derive(Serialize)]
struct TokenRecord<'s> {
    at: usize,
    len: usize,
    kind: TokenType,
    text: &'s str,
}

impl<'s> TokenRecord<'s> {
    fn new(token: &Token, source: &'s str) -> Self {
        Self {
            at: token.at,
            len: token.len,
            kind: token.kind,
            text: token.text(source),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Glint v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    match args.command {
        Command::Render(source) => {
            let (language, text) = read_source(&source, &config)?;
            let editor = Editor::new(
                EditorOptions {
                    language: language.id().to_string(),
                    initial_text: text,
                },
                &config,
            )?;
            println!("{}", editor.to_html());
        }
        Command::Tokens(source) => {
            let (language, text) = read_source(&source, &config)?;
            let tokens = tokenize(&text, &config.tokenizer_options(language))?;
            let records: Vec<_> = tokens.iter().map(|t| TokenRecord::new(t, &text)).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Languages => {
            for language in Language::ALL {
                println!("{language}");
            }
        }
    }

    Ok(())
}

/// Resolves the language and loads the text for `render` and `tokens`.
fn read_source(source: &Source, config: &Config) -> anyhow::Result<(Language, String)> {
    let text = match &source.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
        None => SAMPLE.to_string(),
    };
    let language = resolve_language(source.language.as_deref(), source.file.as_deref(), config)?;
    tracing::debug!(%language, bytes = text.len(), "loaded source");
    Ok((language, text))
}

fn resolve_language(
    explicit: Option<&str>,
    file: Option<&Path>,
    config: &Config,
) -> anyhow::Result<Language> {
    if let Some(id) = explicit {
        return Ok(Language::from_id(id)?);
    }
    if let Some(language) = file
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
        .and_then(Language::detect)
    {
        return Ok(language);
    }
    Ok(Language::from_id(&config.editor.language)?)
}
