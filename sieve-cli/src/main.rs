//! Sieve CLI
//!
//! Sanitizes HTML against a whitelist and prints the result.
//!
//! - sieve -w whitelist.json page.html     # Sanitize a file
//! - sieve --html '<b>hi</b>' --allow-all  # Pass-through mode
//! - sieve --tokens page.html              # Inspect the token stream

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use sieve_common::logging::{LogConfig, LogFormat, init_logging};
use sieve_html::{HtmlFilter, SanitizedResult, Segments, Token, WhitelistConfig};
use tracing::debug;

/// Sieve: whitelist-driven HTML sanitizer
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Sanitize a file, keeping only what the whitelist allows
    sieve -w whitelist.json page.html

    # Sanitize stdin with an empty whitelist (text only)
    cat page.html | sieve

    # Keep every tag and attribute, normalizing the markup
    sieve --allow-all --html '<INPUT checked=no>'

    # Show the token stream instead of sanitizing
    sieve --tokens --html '<p class=a>hi</p>'

WHITELIST FORMAT:
    { "p": null, "a": ["href", "title"], "img": { "src": 1 } }
    A null document disables filtering.
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// HTML file to sanitize (reads stdin when omitted)
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Sanitize this HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// JSON whitelist file (default: empty whitelist)
    #[arg(short, long, value_name = "FILE")]
    whitelist: Option<PathBuf>,

    /// Disable filtering entirely
    #[arg(long, conflicts_with = "whitelist")]
    allow_all: bool,

    /// Print the token stream instead of sanitized output
    #[arg(long)]
    tokens: bool,

    /// Report removed tags and attributes on stderr
    #[arg(long)]
    issues: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log filter directive, overriding -v and RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&log_config(&cli)).context("failed to initialize logging")?;

    let html = read_input(&cli)?;

    if cli.tokens {
        print_tokens(&html);
        return Ok(());
    }

    let filter = HtmlFilter::new(load_whitelist(&cli)?);
    let result = filter.filter(&html);

    if cli.issues {
        print_issues(&result);
    }
    print!("{result}");

    Ok(())
}

/// Build the logging configuration from CLI flags
fn log_config(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::from_verbosity(cli.verbose);
    if let Some(ref filter) = cli.log_filter {
        config = config.with_filter(filter);
    }
    if cli.json_logs {
        config = config.with_format(LogFormat::Json);
    }
    config
}

/// Read the markup from --html, a file, or stdin
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        return Ok(html.clone());
    }
    if let Some(ref path) = cli.path {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut html = String::new();
    let _ = io::stdin()
        .read_to_string(&mut html)
        .context("failed to read stdin")?;
    Ok(html)
}

/// Resolve the whitelist from CLI flags
fn load_whitelist(cli: &Cli) -> Result<WhitelistConfig> {
    if cli.allow_all {
        return Ok(WhitelistConfig::disabled());
    }
    let Some(ref path) = cli.whitelist else {
        debug!("no whitelist given, stripping every tag");
        return Ok(WhitelistConfig::new());
    };

    let whitelist = WhitelistConfig::from_json_file(path)?;
    if whitelist.is_disabled() {
        debug!(path = %path.display(), "whitelist disables filtering");
    } else {
        debug!(path = %path.display(), tags = whitelist.len(), "whitelist loaded");
    }
    Ok(whitelist)
}

/// Print every segment of the input with its byte range
fn print_tokens(html: &str) {
    for (token, span) in Segments::new(html) {
        let range = format!("{:>5}..{:<5}", span.start, span.end);
        match token {
            Token::OpenTag { .. } => println!("{} {}", range.dimmed(), token.green()),
            Token::CloseTag { .. } => println!("{} {}", range.dimmed(), token.cyan()),
            Token::Comment { .. } => println!("{} {}", range.dimmed(), token.yellow()),
            Token::Text { .. } => println!("{} {}", range.dimmed(), token),
        }
    }
}

/// Print the issue report to stderr
fn print_issues(result: &SanitizedResult) {
    if result.issues().is_empty() {
        eprintln!("{}", "no issues".dimmed());
        return;
    }

    eprintln!("=== Issues ===");
    for issue in result.issues() {
        eprintln!("  - {issue}");
    }
    let summary: Vec<String> = result
        .issue_counts()
        .into_iter()
        .map(|(kind, count)| format!("{count} {kind}"))
        .collect();
    eprintln!("{}", summary.join(", ").bold());

    if result.ended_suppressing() {
        eprintln!("{}", "input ended inside a removed element".red());
    }
}
