mod debug_report;

use chrono::{DateTime, FixedOffset};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use wayfind::{Context, Options, route_verbose_with, route_with};

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "WAYFIND_LOG";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0} expects a value")]
    MissingValue(&'static str),
    #[error("input provided multiple times")]
    DuplicateInput,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid --reference '{0}' (expected RFC 3339, e.g. 2024-05-15T14:30:00-05:00)")]
    InvalidReference(String),
    #[error("no input provided\n\n{}", help_text())]
    NoInput,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse { path: PathBuf, source: serde_json::Error },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Encode(_) => 1,
            _ => 2,
        }
    }
}

fn main() {
    init_tracing();

    let result = parse_args().and_then(|config| run(&config));
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    input: String,
    reference_time: Option<DateTime<FixedOffset>>,
    options: Options,
    json: bool,
    color: bool,
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let context = match config.reference_time {
        Some(reference_time) => Context::at(reference_time),
        None => Context::default(),
    };

    if config.json {
        let out = route_with(&config.input, &context, &config.options);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let details = route_verbose_with(&config.input, &context, &config.options);
        debug_report::print_run(&config.input, &context, &details, config.color);
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut reference_time = None;
    let mut options = Options::default();
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("wayfind {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--reference" => {
                let value = args.next().ok_or(CliError::MissingValue("--reference"))?;
                reference_time = Some(parse_reference(&value)?);
            }
            "--config" => {
                let value = args.next().ok_or(CliError::MissingValue("--config"))?;
                options = load_options(PathBuf::from(value))?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or(CliError::MissingValue("--input"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                reference_time = Some(parse_reference(arg.trim_start_matches("--reference="))?);
            }
            _ if arg.starts_with("--config=") => {
                options = load_options(PathBuf::from(arg.trim_start_matches("--config=")))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => return Err(CliError::UnknownOption(arg)),
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };
    if input.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    Ok(CliConfig { input, reference_time, options, json, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(CliError::DuplicateInput);
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CliError::Stdin)?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<DateTime<FixedOffset>, CliError> {
    DateTime::parse_from_rfc3339(value).map_err(|_| CliError::InvalidReference(value.to_string()))
}

fn load_options(path: PathBuf) -> Result<Options, CliError> {
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(CliError::ConfigRead { path, source }),
    };
    Options::from_json(&text).map_err(|source| CliError::ConfigParse { path, source })
}

fn help_text() -> String {
    format!(
        "wayfind {version}

Query understanding and provider routing CLI.

Usage:
  wayfind [OPTIONS] [--] <query...>
  wayfind [OPTIONS] --input <text>

Options:
  -i, --input <text>         Query to route. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <timestamp>    Reference time in RFC 3339 (with offset).
                             Default: the local wall clock.
  --config <file.json>       Options document (planner limits, input cap).
  --json                     Print {{intent, plan}} as JSON instead of a report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Tracing filter, e.g. wayfind=debug (default: warn).

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments, unreadable config or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
