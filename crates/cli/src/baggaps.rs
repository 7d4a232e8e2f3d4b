//! baggaps - Find coverage gaps in a disc golf bag
//!
//! A command line tool that reads a bag JSON file, reports the
//! under-served regions of the (speed, stability) grid, and optionally
//! ranks catalog discs to fill them.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;

use discgap_core::error::Result;
use discgap_core::{
    CatalogDisc, Disc, Gap, GapSettings, SuggestCriteria, find_gaps, load_catalog, load_discs,
    suggest,
};

/// Output format for the gap report.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Human-readable listing (default)
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Find coverage gaps in a disc golf bag and suggest discs to fill them.
#[derive(Parser, Debug)]
#[command(name = "baggaps")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a bag JSON file (an array of discs)
    bag: PathBuf,

    /// Minimum gap size, in grid cells, required on both axes
    #[arg(short = 't', long, default_value = "3")]
    gap_threshold: i32,

    /// Output type
    #[arg(short = 'O', long, value_enum, default_value = "text")]
    output_type: OutputType,

    /// Output file name, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Path to a catalog JSON file; adds ranked suggestions per gap
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Maximum suggestions per gap
    #[arg(short = 'l', long, default_value = "10")]
    limit: usize,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

/// One reported gap with its suggestions, as serialized in JSON output.
#[derive(Serialize)]
struct GapEntry<'a> {
    #[serde(flatten)]
    gap: Gap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<&'a CatalogDisc>,
}

fn gap_entries<'a>(
    gaps: &[Gap],
    catalog: Option<&'a [CatalogDisc]>,
    limit: usize,
) -> Vec<GapEntry<'a>> {
    gaps.iter()
        .map(|&gap| {
            let suggestions = catalog
                .map(|cat| suggest(cat, &SuggestCriteria::from_gap(&gap).with_limit(limit)))
                .unwrap_or_default();
            GapEntry { gap, suggestions }
        })
        .collect()
}

fn write_text(out: &mut dyn Write, discs: &[Disc], entries: &[GapEntry]) -> io::Result<()> {
    writeln!(out, "{} discs, {} gaps", discs.len(), entries.len())?;
    for entry in entries {
        let gap = &entry.gap;
        writeln!(
            out,
            "speed {}..{}, stability {}..{} ({}x{})",
            gap.speed_start,
            gap.speed_end,
            gap.stability_start,
            gap.stability_end,
            gap.speed_span(),
            gap.stability_span()
        )?;
        for disc in &entry.suggestions {
            writeln!(
                out,
                "    {} {} ({}/{}/{}/{})",
                disc.brand, disc.name, disc.speed, disc.glide, disc.turn, disc.fade
            )?;
        }
    }
    Ok(())
}

fn process(args: &Args, settings: &GapSettings, out: &mut dyn Write) -> Result<()> {
    let discs = load_discs(&args.bag)?;
    let gaps = find_gaps(&discs, settings);

    let catalog = match &args.catalog {
        Some(path) => Some(load_catalog(path)?),
        None => None,
    };
    let entries = gap_entries(&gaps, catalog.as_deref(), args.limit);

    match args.output_type {
        OutputType::Text => write_text(out, &discs, &entries)?,
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let settings = match GapSettings::with_threshold(args.gap_threshold) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if !args.bag.exists() {
        eprintln!("Error: File not found: {}", args.bag.display());
        std::process::exit(1);
    }

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    if let Err(e) = process(&args, &settings, &mut output) {
        eprintln!("Error processing {}: {}", args.bag.display(), e);
        std::process::exit(1);
    }

    output.flush()?;
    Ok(())
}
