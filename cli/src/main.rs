use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use json_mutator_core::{mutate_with_options, MutateOptions, OutputFormat, Payload};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "json-mutator")]
#[command(
    about = "Generate a stream of mutated JSON payloads from a JSON schema and a JSON sample"
)]
#[command(version)]
struct Cli {
    /// Path to the JSON schema file
    #[arg(long)]
    schema: PathBuf,

    /// Path to the JSON sample file
    #[arg(long)]
    sample: PathBuf,

    /// Number of mutated payloads to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    iterations: usize,

    /// Write all payloads to this file as a single JSON array (defaults to
    /// one document per payload on stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Pretty)]
    format: FormatArg,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum FormatArg {
    Pretty,
    Compact,
}

impl From<FormatArg> for OutputFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Compact => OutputFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let schema = read_json(&cli.schema, "schema")?;
    let sample = read_json(&cli.sample, "sample")?;

    let options = MutateOptions {
        iterations: cli.iterations,
    };
    let payloads = mutate_with_options(&schema, &sample, &options);
    let format = OutputFormat::from(cli.format);

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_document(&mut writer, &Payload::Array(payloads), format)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Mutated payloads written to: {}", path.display());
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            for payload in &payloads {
                write_document(&mut writer, payload, format)
                    .context("Failed to write payload to stdout")?;
            }
        }
    }

    Ok(())
}

/// Read and parse a JSON file, keeping "cannot open" and "not valid JSON"
/// as separate failures.
fn read_json(path: &Path, role: &str) -> Result<serde_json::Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {role} file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Invalid JSON in {role} file: {}", path.display()))
}

fn write_document<W: Write>(writer: &mut W, payload: &Payload, format: OutputFormat) -> Result<()> {
    payload.write_json(writer, format)?;
    // Ensure trailing newline
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
