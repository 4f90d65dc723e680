//! # pipetable
//!
//! A CLI tool that renders rows of data as a Markdown pipe table.
//!
//! ## Overview
//!
//! pipetable is built on top of pipetablelib. It reads rows from a file or
//! stdin, feeds them through a `TableBuilder` and prints the result, ready to
//! paste into a Markdown document or notebook cell.
//!
//! ## Usage
//!
//! ```bash
//! # Render a CSV file, first line as header
//! pipetable people.csv
//!
//! # JSON array of arrays from stdin, with alignment markers
//! echo '[["Name","Age"],["Alice",30]]' | pipetable --format json --align l,r
//!
//! # Custom border characters (horizontal, vertical, corner, header fill)
//! pipetable people.tsv --chars '=!+~'
//!
//! # Dump the table state as JSON
//! pipetable people.csv --output json
//! ```

mod input;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use pipetablelib::{build_table, Align, BorderChars, RenderOptions};
use tracing::Level;

use crate::input::{parse_rows, read_input, InputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pipetable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render rows of data as a Markdown pipe table")
        .arg(
            Arg::new("input")
                .help("Input file (defaults to stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["json", "csv", "tsv"])
                .help("Input format (inferred from the file extension by default)"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("Treat the first row as data instead of the header"),
        )
        .arg(
            Arg::new("align")
                .short('a')
                .long("align")
                .value_delimiter(',')
                .value_parser(["l", "r", "c"])
                .help("Column alignment (comma-separated: l,r,c)"),
        )
        .arg(
            Arg::new("chars")
                .long("chars")
                .help("Border characters: horizontal, vertical, corner, header fill"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["markdown", "json"])
                .default_value("markdown")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (repeatable)"),
        )
}

/// Map CLI arguments onto render options
fn build_options(matches: &ArgMatches) -> Result<RenderOptions, anyhow::Error> {
    let mut options = RenderOptions::new().header(!matches.get_flag("no-header"));

    if let Some(chars) = matches.get_one::<String>("chars") {
        let chars: BorderChars = chars.parse()?;
        options = options.chars(chars);
    }

    if let Some(tokens) = matches.get_many::<String>("align") {
        let tokens: Vec<&String> = tokens.collect();
        options = options.align(Align::parse_all(&tokens)?);
    }

    Ok(options)
}

/// Read input, build the table, and produce what should be printed
fn run(matches: &ArgMatches) -> Result<Option<String>, anyhow::Error> {
    let path = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let format = matches
        .get_one::<String>("format")
        .and_then(|name| InputFormat::from_name(name))
        .unwrap_or_else(|| InputFormat::from_path(path));
    let options = build_options(matches)?;

    let text = read_input(path)?;
    let rows = parse_rows(&text, format)?;
    tracing::info!(rows = rows.len(), ?format, "input parsed");

    let table = build_table(&rows, &options)?;

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => {
            let json = serde_json::to_string_pretty(&table).context("failed to serialize table")?;
            Ok(Some(json))
        }
        _ => Ok(table.draw()),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(Some(output)) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").for_stderr().red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
