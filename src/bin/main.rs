//! CLI entry point: reads a file, infers its table of contents, and prints
//! the result as JSON (or the literal `null` when no pattern was found).

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

/// Infers the table of contents of a plain-text book when no structural
/// markup is present
#[derive(Parser)]
#[command(name = "guess-toc")]
#[command(version)]
struct Cli {
    /// Path to the article to analyze
    file: PathBuf,
}

/// Normalize `\r\n` and lone `\r` to `\n`, per the CLI's newline contract
/// with the engine (the engine assumes an already-normalized article).
fn normalize_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.file).unwrap_or_else(|e| {
        eprintln!("failed to read {}: {e}", cli.file.display());
        std::process::exit(1);
    });
    let article = normalize_newlines(&raw);

    let started = Instant::now();
    let result = guess_toc::infer_toc(&article);
    log::info!("inference over {} bytes took {:?}", article.len(), started.elapsed());

    match result {
        Some(toc) => {
            let json = serde_json::to_string_pretty(&toc).unwrap_or_else(|e| {
                eprintln!("failed to serialize result: {e}");
                std::process::exit(1);
            });
            println!("{json}");
        }
        None => println!("null"),
    }
}
