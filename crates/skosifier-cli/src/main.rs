//! skosifier: convert a semicolon-separated vocabulary into SKOS.
//!
//! ```text
//! skosifier <input.csv> <outputdir> <baseURI> [--format nt --format ttl] [--per-concept] [--html]
//! ```
//!
//! Exit status: 0 on success, 1 on usage errors, 2 when the input cannot be
//! read or mapped, 3 when output cannot be written.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use skosifier_core::{defaults, Config, ExitClass, RdfFormat, RunReport};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_USAGE: u8 = 1;
const EXIT_INPUT: u8 = 2;
const EXIT_OUTPUT: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "skosifier")]
#[command(author, version, about = "Convert a semicolon-separated vocabulary into a SKOS concept scheme")]
struct Cli {
    /// Input file (first line is the header: id;parent;nl;fr;...)
    input: PathBuf,

    /// Output directory, created if missing
    output: PathBuf,

    /// Base IRI used to mint concept IRIs (e.g. http://vocab.example.org/taxonomy/)
    base_uri: String,

    /// Whole-graph formats to write: nt, ttl, jsonld (repeatable)
    #[arg(short, long = "format", value_parser = parse_format, default_values = ["nt", "ttl"])]
    formats: Vec<RdfFormat>,

    /// Also write one file per concept for every format
    #[arg(long)]
    per_concept: bool,

    /// Also write HTML table views (index.html and html/<id>.html)
    #[arg(long)]
    html: bool,

    /// Input field delimiter (single ASCII character)
    #[arg(short, long, value_parser = parse_delimiter, default_value = ";")]
    delimiter: u8,

    /// Label languages, exactly four comma-separated codes
    #[arg(long, value_delimiter = ',', default_values = defaults::LANGUAGES)]
    languages: Vec<String>,
}

fn parse_format(s: &str) -> Result<RdfFormat, String> {
    s.parse()
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s)),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    match run(cli) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_OUTPUT)
            }
        },
        Err(e) => {
            error!(error = %e, "Conversion failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<RunReport> {
    let config = Config::new(cli.input, cli.output, cli.base_uri)
        .with_formats(cli.formats)
        .with_per_concept(cli.per_concept)
        .with_html(cli.html)
        .with_delimiter(cli.delimiter)
        .with_languages(cli.languages);

    let report = skosifier_core::run(&config)
        .with_context(|| format!("converting {}", config.input.display()))?;
    Ok(report)
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<skosifier_core::Error>() {
        Some(skosifier_core::Error::Config(_)) => EXIT_USAGE,
        Some(e) => match e.exit_class() {
            ExitClass::Input => EXIT_INPUT,
            ExitClass::Output => EXIT_OUTPUT,
        },
        None => EXIT_INPUT,
    }
}

/// Logs go to stderr so stdout carries only the JSON run report.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   RUST_LOG    - standard env filter (default: "skosifier=info,skosifier_core=info")
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "skosifier=info,skosifier_core=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_and_defaults() {
        let cli = Cli::try_parse_from(["skosifier", "in.csv", "out", "http://ex.org/voc/"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.formats, vec![RdfFormat::NTriples, RdfFormat::Turtle]);
        assert_eq!(cli.delimiter, b';');
        assert_eq!(cli.languages, vec!["nl", "fr", "de", "en"]);
        assert!(!cli.per_concept);
    }

    #[test]
    fn test_cli_missing_arguments() {
        assert!(Cli::try_parse_from(["skosifier", "in.csv"]).is_err());
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "skosifier",
            "in.csv",
            "out",
            "http://ex.org/voc/",
            "--format",
            "jsonld",
            "--per-concept",
            "--html",
            "--delimiter",
            ",",
            "--languages",
            "es,it,pt,ca",
        ])
        .unwrap();
        assert_eq!(cli.formats, vec![RdfFormat::JsonLd]);
        assert!(cli.per_concept);
        assert!(cli.html);
        assert_eq!(cli.delimiter, b',');
        assert_eq!(cli.languages, vec!["es", "it", "pt", "ca"]);
    }

    #[test]
    fn test_parse_delimiter_rejects_multichar() {
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
        assert_eq!(parse_delimiter("\t"), Ok(b'\t'));
    }

    #[test]
    fn test_exit_code_mapping() {
        let input: anyhow::Error = skosifier_core::Error::EmptyIdentifier { line: 2 }.into();
        assert_eq!(exit_code(&input), EXIT_INPUT);

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let output: anyhow::Error = skosifier_core::Error::output("out", io_err).into();
        assert_eq!(exit_code(&output.context("writing")), EXIT_OUTPUT);

        let config: anyhow::Error = skosifier_core::Error::Config("bad".into()).into();
        assert_eq!(exit_code(&config), EXIT_USAGE);
    }
}
