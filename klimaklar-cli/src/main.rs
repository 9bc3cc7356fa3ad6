//! Klimaklar SMB CLI Application
//!
//! This is the command-line input surface for the klimaklar-core library.
//! It collects company details and yearly usage figures from flags and/or a
//! TOML input file, and adds:
//! - Non-negativity validation of all figures
//! - On-screen summary with a category bar chart (or JSON)
//! - Writing the CSV data export and the PDF climate report

use anyhow::{Context, Result};
use clap::Parser;
use klimaklar_core::{Artifact, Category, Session};
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod summary;

use config::{InputFile, Overrides};

/// Klimaklar SMB - CO2 footprint calculator and report generator
#[derive(Parser, Debug)]
#[command(name = "klimaklar")]
#[command(about = "Calculate a small business CO2 footprint and export CSV/PDF reports", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a TOML input file with [company] and [usage] sections
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Company name (default: "Eksempel ApS")
    #[arg(long, value_name = "NAME")]
    company: Option<String>,

    /// Industry (default: "Produktion")
    #[arg(long, value_name = "NAME")]
    industry: Option<String>,

    /// Report year (default: "2025")
    #[arg(long, value_name = "YEAR")]
    year: Option<String>,

    /// Electricity consumption, kWh per year (see the yearly electricity bill)
    #[arg(long, value_name = "KWH", value_parser = non_negative)]
    el: Option<f64>,

    /// Gas consumption, m³ per year (see the yearly gas statement)
    #[arg(long, value_name = "M3", value_parser = non_negative)]
    gas: Option<f64>,

    /// Kilometres driven by vans per year
    #[arg(long, value_name = "KM", value_parser = non_negative)]
    van_km: Option<f64>,

    /// Kilometres driven by trucks per year
    #[arg(long, value_name = "KM", value_parser = non_negative)]
    truck_km: Option<f64>,

    /// Steel used, kg per year
    #[arg(long, value_name = "KG", value_parser = non_negative)]
    steel: Option<f64>,

    /// Wood used, kg per year
    #[arg(long, value_name = "KG", value_parser = non_negative)]
    wood: Option<f64>,

    /// Plastic used, kg per year
    #[arg(long, value_name = "KG", value_parser = non_negative)]
    plastic: Option<f64>,

    /// Concrete used, kg per year
    #[arg(long, value_name = "KG", value_parser = non_negative)]
    concrete: Option<f64>,

    /// Aluminium used, kg per year
    #[arg(long, value_name = "KG", value_parser = non_negative)]
    aluminium: Option<f64>,

    /// Paper and cardboard used, kg per year
    #[arg(long, value_name = "KG", value_parser = non_negative)]
    paper: Option<f64>,

    /// Directory to write klimadata.csv and klimarapport.pdf into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Do not write the CSV export
    #[arg(long)]
    no_csv: bool,

    /// Do not write the PDF report
    #[arg(long)]
    no_pdf: bool,

    /// Print the result as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Print the emission factor table and exit
    #[arg(long)]
    show_factors: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Collect flag values that override the input file
    fn overrides(&self) -> Overrides {
        let usage = [
            (Category::Electricity, self.el),
            (Category::Gas, self.gas),
            (Category::Van, self.van_km),
            (Category::Truck, self.truck_km),
            (Category::Steel, self.steel),
            (Category::Wood, self.wood),
            (Category::Plastic, self.plastic),
            (Category::Concrete, self.concrete),
            (Category::Aluminium, self.aluminium),
            (Category::Paper, self.paper),
        ]
        .into_iter()
        .filter_map(|(category, value)| value.map(|v| (category, v)))
        .collect();

        Overrides {
            company: self.company.clone(),
            industry: self.industry.clone(),
            report_year: self.year.clone(),
            usage,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Klimaklar SMB CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using klimaklar-core v{}", klimaklar_core::VERSION);

    if args.show_factors {
        print!("{}", summary::render_factors()?);
        return Ok(());
    }

    // Collect the input snapshot
    let mut input = match &args.input {
        Some(path) => {
            log::info!("Loading input file: {:?}", path);
            config::load_input_file(path)?
        }
        None => InputFile::default(),
    };
    input.apply_overrides(&args.overrides());
    input
        .usage
        .validate()
        .context("Usage figures must be non-negative numbers")?;

    // Calculate
    let mut session = Session::new();
    let result = session.calculate(input.usage).clone();

    if args.json {
        let json = serde_json::to_string_pretty(&summary::JsonSummary::new(&input.company, &result))?;
        println!("{}", json);
    } else if !args.quiet {
        print!("{}", summary::render_summary(&input.company, &result)?);
    }

    // Export
    let mut written = Vec::new();
    if !args.no_csv {
        if let Some(artifact) = session.csv_export() {
            written.push(write_artifact(&args.output_dir, &artifact)?);
        }
    }
    if !args.no_pdf {
        let generated = chrono::Local::now().naive_local();
        if let Some(artifact) = session.pdf_export(&input.company, generated)? {
            written.push(write_artifact(&args.output_dir, &artifact)?);
        }
    }

    if !args.json && !args.quiet && !written.is_empty() {
        println!();
        for path in &written {
            println!("✓ Gemt: {}", path.display());
        }
    }

    Ok(())
}

/// Write an artifact into `dir` under its file name
fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let path = dir.join(artifact.file_name);
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {:?}", path))?;

    log::info!(
        "Wrote {} ({}, {} bytes)",
        path.display(),
        artifact.mime,
        artifact.len()
    );
    Ok(path)
}

/// Parse a finite, non-negative number
fn non_negative(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be a finite, non-negative number", value));
    }
    Ok(value)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
