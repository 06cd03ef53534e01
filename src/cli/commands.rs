use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::json;

use super::request::parse_request;
use crate::config::Config;
use crate::convert::{ConversionError, convert, parse_value};
use crate::history::Session;
use crate::search::suggest;
use crate::table::{find_category, list_categories, list_units};
use crate::{logging, tui};

/// Suggestions offered for an unknown category or unit
const MAX_SUGGESTIONS: usize = 3;

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(version = "0.1.0")]
#[command(about = "Convert values between units of measurement", long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List measurement categories
    Categories,

    /// List the units of a category
    Units {
        /// Category name (e.g. "Digital Storage")
        category: String,
    },

    /// Convert a single value
    Convert {
        /// Value to convert (non-negative)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (e.g. "Kilometers")
        from: String,

        /// Destination unit (e.g. "Miles")
        to: String,

        /// Category of both units (default: config `default_category`)
        #[arg(short, long)]
        category: Option<String>,

        /// Decimal places in the result (default: config `precision`)
        #[arg(short, long)]
        precision: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read "<Category>: <value> <From> -> <To>" lines from stdin
    Session {
        /// Write the session history as JSON when input ends
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },

    /// Open the interactive converter
    Interactive,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration resolved");

    match &cli.command {
        Some(Commands::Categories) => show_categories(),
        Some(Commands::Units { category }) => show_units(category)?,
        Some(Commands::Convert { value, from, to, category, precision, json }) => {
            let category = category.as_deref().unwrap_or(&config.default_category);
            let precision = precision.unwrap_or(config.precision);
            convert_once(value, from, to, category, precision, *json)?;
        }
        Some(Commands::Session { export }) => {
            let stdin = io::stdin();
            run_session(stdin.lock(), &mut io::stdout(), &config, export.as_deref())?;
        }
        Some(Commands::Interactive) => tui::run_interactive(&config)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_categories() {
    for name in list_categories() {
        println!("{}", name);
    }
}

fn show_units(category: &str) -> Result<()> {
    let units = list_units(category).map_err(|e| with_hint(&e))?;
    for unit in units {
        println!("{}", unit);
    }
    Ok(())
}

fn convert_once(
    value: &str,
    from: &str,
    to: &str,
    category: &str,
    precision: usize,
    as_json: bool,
) -> Result<()> {
    let value = parse_value(value)?;
    let result = convert(value, from, to, category).map_err(|e| with_hint(&e))?;

    if as_json {
        let out = json!({
            "category": category,
            "value": value,
            "from_unit": from,
            "to_unit": to,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:?} {} = {:.prec$} {}", value, from, result, to, prec = precision);
    }
    Ok(())
}

/// Batch session: one conversion per input line, each success recorded in
/// the session history. Failed lines are reported and skipped.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &Config,
    export: Option<&Path>,
) -> Result<()> {
    let mut session = Session::new();
    let mut failures = 0usize;

    for (line_num, line) in input.lines().enumerate() {
        let line = line.context("Failed to read session input")?;
        match process_line(&mut session, &line, config.precision) {
            Ok(Some(text)) => writeln!(out, "{}", text)?,
            Ok(None) => {}
            Err(e) => {
                failures += 1;
                eprintln!("Line {}: {:#}", line_num + 1, e);
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Conversion History")?;
    for record in session.recent_history(config.history_limit) {
        writeln!(out, "{}", record.format_with_precision(config.precision))?;
    }

    tracing::info!(
        session = %session.id(),
        converted = session.history().len(),
        failed = failures,
        "session finished"
    );

    if let Some(path) = export {
        session.export_json(path)?;
    }

    Ok(())
}

fn process_line(session: &mut Session, line: &str, precision: usize) -> Result<Option<String>> {
    let Some(request) = parse_request(line)? else {
        return Ok(None);
    };
    let value = parse_value(&request.value)?;
    let record = session
        .convert_and_record(value, &request.from_unit, &request.to_unit, &request.category)
        .map_err(|e| with_hint(&e))?;
    Ok(Some(record.result_text(precision)))
}

/// Turn a conversion error into a user-facing error, adding close matches
/// for unknown names
fn with_hint(err: &ConversionError) -> anyhow::Error {
    let candidates: Vec<String> = match err {
        ConversionError::UnknownCategory { category } => {
            suggest(category, list_categories(), MAX_SUGGESTIONS)
        }
        ConversionError::UnknownUnit { category, unit } => match find_category(category) {
            Ok(cat) => suggest(unit, cat.unit_names(), MAX_SUGGESTIONS),
            Err(_) => Vec::new(),
        },
        _ => Vec::new(),
    };

    if candidates.is_empty() {
        anyhow::Error::new(err.clone())
    } else {
        anyhow::anyhow!("{} (did you mean: {}?)", err, candidates.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_lines(input: &str, config: &Config) -> String {
        let mut out = Vec::new();
        run_session(Cursor::new(input), &mut out, config, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_prints_results_and_history() {
        let output = run_lines(
            "Length: 1 Kilometers -> Meters\nDigital Storage: 1 Bytes -> Bits\n",
            &Config::default(),
        );
        assert!(output.contains("1.0 Kilometers = 1000.000000 Meters"));
        assert!(output.contains("1.0 Bytes = 8.000000 Bits"));
        assert!(output.contains("Conversion History"));
        assert!(output.contains(" - 1.0 Kilometers -> 1000.000000 Meters"));
    }

    #[test]
    fn test_session_history_capped_by_config() {
        let config = Config { history_limit: 2, ..Config::default() };
        let input: String =
            (1..=4).map(|i| format!("Time: {} Minutes -> Seconds\n", i)).collect();
        let output = run_lines(&input, &config);

        let history: Vec<&str> = output
            .split("Conversion History")
            .nth(1)
            .unwrap()
            .lines()
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(history.len(), 2);
        assert!(history[0].contains("3.0 Minutes -> 180.000000 Seconds"));
        assert!(history[1].contains("4.0 Minutes -> 240.000000 Seconds"));
    }

    #[test]
    fn test_session_skips_bad_lines() {
        let output = run_lines(
            "Length: 1 Parsecs -> Meters\nnonsense\nMass: -2 Grams -> Grams\nMass: 1 Kilograms -> Grams\n",
            &Config::default(),
        );
        let history = output.split("Conversion History").nth(1).unwrap();
        assert_eq!(history.lines().filter(|l| !l.is_empty()).count(), 1);
        assert!(history.contains("1.0 Kilograms -> 1000.000000 Grams"));
    }

    #[test]
    fn test_session_uses_configured_precision() {
        let config = Config { precision: 2, ..Config::default() };
        let output = run_lines("Temperature: 100 Celsius -> Fahrenheit\n", &config);
        assert!(output.contains("100.0 Celsius = 212.00 Fahrenheit"));
    }

    #[test]
    fn test_with_hint_suggests_units() {
        let err = ConversionError::UnknownUnit {
            category: "Length".to_string(),
            unit: "Kilometer".to_string(),
        };
        let message = with_hint(&err).to_string();
        assert!(message.contains("did you mean: Kilometers"));
    }

    #[test]
    fn test_with_hint_without_matches() {
        let err = ConversionError::UnknownCategory { category: "qqqq".to_string() };
        assert_eq!(with_hint(&err).to_string(), "Unknown category: qqqq");
    }

    #[test]
    fn test_with_hint_suggests_categories() {
        let err = ConversionError::UnknownCategory { category: "Volum".to_string() };
        assert!(with_hint(&err).to_string().contains("did you mean: Volume"));
    }
}
