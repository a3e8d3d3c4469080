// src/cli.rs
use std::{fs::File, io::{self, BufWriter}, path::PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};

use crate::{
    config::{consts::*, ApiKey, DestinationStyle, RunOptions},
    csv::{self, ExportFormat},
    error::Error,
    logging::{init_logging, LogTarget},
    pipeline,
    progress::Progress,
};

/// Scrape the Championship clubs, geocode every stadium from an origin and
/// print the distance table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Wiki page holding the club/stadium table
    #[arg(long, default_value = SOURCE_URL)]
    pub url: String,

    /// Where every journey starts (address or postcode)
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Directions API endpoint
    #[arg(long, default_value = DIRECTIONS_ENDPOINT)]
    pub endpoint: String,

    /// Concurrent geocode requests (1 = sequential)
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Build destinations as "{stadium}{club}" with no separator
    #[arg(long)]
    pub legacy_destination: bool,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Omit the header line
    #[arg(long)]
    pub no_headers: bool,

    /// Write the table here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Cli {
    pub fn run_options(&self, api_key: ApiKey) -> RunOptions {
        let style = if self.legacy_destination {
            DestinationStyle::Concatenated
        } else {
            DestinationStyle::Separated
        };
        RunOptions::new(api_key)
            .with_source_url(self.url.clone())
            .with_origin(self.origin.clone())
            .with_endpoint(self.endpoint.clone())
            .with_workers(self.workers)
            .with_destination_style(style)
    }
}

/// Prints one line per stadium to stderr.
struct CliProgress {
    total: usize,
    seen: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _index: usize, stadium: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {}", self.seen, self.total, stadium);
    }
    fn item_failed(&mut self, _index: usize, stadium: &str, error: &Error) {
        self.seen += 1;
        eprintln!("[{}/{}] {} skipped: {}", self.seen, self.total, stadium, error);
    }
}

pub fn run() -> color_eyre::Result<()> {
    init_logging(LogTarget::Stderr);
    let cli = Cli::parse();

    let api_key = ApiKey::from_env()?;
    let opts = cli.run_options(api_key);

    let mut progress = CliProgress { total: 0, seen: 0 };
    let report = pipeline::run(&opts, Some(&mut progress))
        .wrap_err_with(|| format!("could not read the club table at {}", opts.source_url))?;

    let format = ExportFormat::from(cli.format);
    let include_headers = !cli.no_headers;
    match &cli.out {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("cannot create {}", path.display()))?;
            csv::write_joined(BufWriter::new(file), &report.joined, include_headers, format)?;
            log::info!("Wrote {} rows to {}", report.joined.len(), path.display());
        }
        None => {
            csv::write_joined(io::stdout().lock(), &report.joined, include_headers, format)?;
        }
    }

    if !report.failures.is_empty() {
        eprintln!("Could not geocode {} stadium(s):", report.failures.len());
        for line in report.failure_lines() {
            eprintln!("  {line}");
        }
    }
    if report.joined.is_empty() && !report.clubs.is_empty() {
        bail!("none of the {} stadiums could be geocoded", report.clubs.len());
    }
    Ok(())
}
