//! # csvreport
//!
//! A CLI tool that reads a people csv file and writes two reports.
//!
//! ## Overview
//!
//! csvreport is built on top of csvreportlib. It reads a comma-delimited
//! file with a `FirstName,LastName,Address,PhoneNumber` header and writes:
//!
//! - **FirstName And LastName Frequency.txt**: how often each first and last
//!   name occurs, most frequent first
//! - **Address List.txt**: the addresses sorted by street name
//!
//! ## Usage
//!
//! ```bash
//! # Write both reports into ./out
//! csvreport people.csv out
//!
//! # Also print the reports as JSON
//! csvreport people.csv out --json
//!
//! # Headerless input, addressing columns by position
//! csvreport people.csv out --no-header -F 1 -F 2 --sort-column 3
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Reports written |
//! | 1    | Invalid data or failed write |
//! | 2    | Input file not found |
//! | 7    | Output directory not found |
//! | 10   | Usage error or help requested |

use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use csvreportlib::{
    write_reports, CsvReportError, DirectorySink, DuplicateKeyPolicy, Importer, Report,
    ReportOptions,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "csvreport <CSV_FILE> <OUTPUT_DIR> [OPTIONS]";

const EXIT_SOURCE_NOT_FOUND: u8 = 2;
const EXIT_OUTPUT_NOT_FOUND: u8 = 7;
const EXIT_USAGE: u8 = 10;

/// JSON document printed with `--json`
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    options: &'a ReportOptions,
    reports: &'a [Report],
    written: Vec<String>,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csvreport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Name frequency and address list reports from a csv file")
        .override_usage(USAGE)
        .arg(
            Arg::new("csv_file")
                .value_name("CSV_FILE")
                .required(true)
                .help("Path of the csv file to import"),
        )
        .arg(
            Arg::new("output_dir")
                .value_name("OUTPUT_DIR")
                .required(true)
                .help("Existing directory the reports are written to"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("Treat the first line as data; columns are named 1..N"),
        )
        .arg(
            Arg::new("frequency-column")
                .short('F')
                .long("frequency-column")
                .action(ArgAction::Append)
                .help("Column to count (repeatable, default: FirstName and LastName)"),
        )
        .arg(
            Arg::new("sort-column")
                .short('s')
                .long("sort-column")
                .help("Column to sort by trailing words (default: Address)"),
        )
        .arg(
            Arg::new("start-word")
                .short('w')
                .long("start-word")
                .value_parser(value_parser!(usize))
                .help("1-indexed word the sort key starts at (default: 2)"),
        )
        .arg(
            Arg::new("duplicate-keys")
                .short('d')
                .long("duplicate-keys")
                .value_name("POLICY")
                .value_parser(DuplicateKeyPolicy::from_str)
                .help("Values sharing a sort key: reject (default) or insertion-order"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the reports as JSON after writing them"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
}

/// `-?`, `/?`, `\?` and friends ask for usage
fn is_help_request(arg: &str) -> bool {
    arg.trim_matches(|c| matches!(c, '/' | '-' | '\\')) == "?"
}

fn print_usage() -> ExitCode {
    println!("{}", USAGE);
    ExitCode::from(EXIT_USAGE)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build report options from matches
fn build_options(matches: &ArgMatches) -> ReportOptions {
    let mut options = ReportOptions::new().has_header(!matches.get_flag("no-header"));

    if let Some(columns) = matches.get_many::<String>("frequency-column") {
        options = options.frequency_columns(columns.cloned());
    }
    if let Some(column) = matches.get_one::<String>("sort-column") {
        options = options.sort_column(column.clone());
    }
    if let Some(start_word) = matches.get_one::<usize>("start-word") {
        options = options.start_word(*start_word);
    }
    if let Some(policy) = matches.get_one::<DuplicateKeyPolicy>("duplicate-keys") {
        options = options.duplicate_keys(*policy);
    }

    options
}

fn not_found(message: String, code: u8) -> ExitCode {
    eprintln!("{}", style(message).red());
    ExitCode::from(code)
}

/// Import the csv file and write its reports
fn run(matches: &ArgMatches) -> Result<ExitCode, anyhow::Error> {
    let csv_file = matches
        .get_one::<String>("csv_file")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let output_dir = matches
        .get_one::<String>("output_dir")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let options = build_options(matches);
    debug!(?options, "report options");

    let importer = match Importer::from_path(csv_file, options) {
        Ok(importer) => importer,
        Err(CsvReportError::SourceNotFound(_)) => {
            return Ok(not_found(
                format!("CSV File '{}' not found", csv_file),
                EXIT_SOURCE_NOT_FOUND,
            ));
        }
        Err(e) => return Err(e.into()),
    };

    if !Path::new(output_dir).is_dir() {
        return Ok(not_found(
            format!("Output Path '{}' not found", output_dir),
            EXIT_OUTPUT_NOT_FOUND,
        ));
    }

    let loaded = importer.import_data()?;
    let reports = loaded.reports()?;
    let written = write_reports(&reports, &DirectorySink::new(output_dir))?;

    if matches.get_flag("json") {
        let output = JsonOutput {
            options: loaded.options(),
            reports: &reports,
            written: written
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for path in &written {
            println!("{} {}", style("wrote").green(), path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || is_help_request(&args[1]) {
        return print_usage();
    }

    let matches = match build_command().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    ExitCode::SUCCESS
                }
                ErrorKind::DisplayHelp => {
                    let _ = err.print();
                    ExitCode::from(EXIT_USAGE)
                }
                _ => {
                    let _ = err.print();
                    print_usage()
                }
            };
        }
    };

    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            if let Some(CsvReportError::SourceNotFound(path)) = e.downcast_ref::<CsvReportError>()
            {
                return not_found(
                    format!("CSV File '{}' not found", path.display()),
                    EXIT_SOURCE_NOT_FOUND,
                );
            }
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
