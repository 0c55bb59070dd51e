// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Try each reading mode against the real terminal.
//!
//! ```text
//! cargo run --example prompt_demo -- --mode masked --mask '*'
//! cargo run --example prompt_demo -- --mode auto-complete --log-file demo.log
//! ```

use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic as _;
use rawline::{CompletionRule, DEFAULT_MASK_GLYPH, Readline, TracingConfig, ok};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Text,
    Hidden,
    Masked,
    Integer,
    AutoComplete,
    Confirm,
    Select,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Reading mode to try
    #[arg(long, short, value_enum, default_value_t = Mode::Text)]
    mode: Mode,
    #[arg(long, short, default_value = "> ", help = "Prompt to show")]
    prompt: String,
    #[arg(long, default_value = DEFAULT_MASK_GLYPH, help = "Replacement glyph for masked mode")]
    mask: String,
    #[arg(long, help = "Write debug logs to this file")]
    log_file: Option<String>,
    #[arg(long, default_value_t = tracing::Level::DEBUG)]
    log_level: tracing::Level,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // The terminal is busy with the prompt, so logs only go to a file.
    if let Some(path) = &cli.log_file {
        rawline::init(TracingConfig::new_file(path, cli.log_level))?;
    }

    let mut readline = Readline::try_new_stdio()?;

    let answer = match cli.mode {
        Mode::Text => readline.text(&cli.prompt)?,
        Mode::Hidden => readline.hidden(&cli.prompt)?,
        Mode::Masked => readline.masked(&cli.prompt, &cli.mask)?,
        Mode::Integer => format!("{:?}", readline.integer(&cli.prompt)?),
        Mode::AutoComplete => readline.auto_complete(&cli.prompt, demo_rule())?,
        Mode::Confirm => readline.confirm(&cli.prompt, Some(true))?.to_string(),
        Mode::Select => readline.select(&[
            ("1", "Rust"),
            ("2", "Zig"),
            ("3", "Go"),
        ])?,
    };

    tracing::info!(message = "prompt_demo", mode = ?cli.mode, answer = %answer);
    println!("{answer:?}");
    std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;

    ok!()
}

fn demo_rule() -> CompletionRule {
    CompletionRule::branches([
        (
            "git",
            Some(CompletionRule::words(["commit", "push", "pull", "status"])),
        ),
        (
            "cargo",
            Some(CompletionRule::words(["build", "check", "test", "run"])),
        ),
        ("exit", None),
    ])
}
