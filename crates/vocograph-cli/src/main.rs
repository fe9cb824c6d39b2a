//! Vocograph CLI - plan and generate multi-band vocoder graphs.
//!
//! `plan` previews the frequency distribution and splitter-tree shape for a
//! band count; `generate` builds the full network into an in-memory document
//! and emits the operation log as JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use vocograph_doc::MemoryDocument;
use vocograph_gen::{
    band_frequencies, build_vocoder, Position, TreeShape, VocoderParams, MIN_BAND_COUNT,
};

/// Vocograph - procedural multi-band vocoder graph generation
#[derive(Parser)]
#[command(name = "vocograph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview band frequencies and the splitter-tree shape
    Plan {
        /// Number of vocoder bands
        #[arg(short, long)]
        bands: usize,
    },

    /// Generate the vocoder graph and emit its operation log as JSON
    Generate {
        /// Number of vocoder bands
        #[arg(short, long, default_value_t = 27)]
        bands: usize,

        /// Horizontal anchor of the layout
        #[arg(long, default_value_t = 0.0)]
        anchor_x: f64,

        /// Vertical anchor of the layout
        #[arg(long, default_value_t = 0.0)]
        anchor_y: f64,

        /// Seed for the timeline ordering jitter
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Also create demo timeline content
        #[arg(long)]
        demo: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { bands } => cmd_plan(bands),
        Commands::Generate {
            bands,
            anchor_x,
            anchor_y,
            seed,
            demo,
            output,
            pretty,
        } => cmd_generate(bands, anchor_x, anchor_y, seed, demo, output, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn cmd_plan(bands: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        bands >= MIN_BAND_COUNT,
        "invalid band count {bands}: a vocoder needs at least {MIN_BAND_COUNT} bands"
    );

    let shape = TreeShape::for_bands(bands);
    println!("{}", format!("{bands}-band vocoder plan").bold());
    println!(
        "  splitter tree: {} level(s) {:?}, {} splitters per tree, {} leaf sockets",
        shape.depth(),
        shape.levels,
        shape.total_splitters,
        shape.leaf_capacity(),
    );
    if shape.leaf_capacity() > bands {
        println!(
            "  {} leaf socket(s) per tree stay unconnected",
            shape.leaf_capacity() - bands
        );
    }

    println!("  band frequencies:");
    for (index, frequency) in band_frequencies(bands).iter().enumerate() {
        println!("    band {:>3}  {:>5} Hz", index + 1, frequency);
    }
    Ok(())
}

fn cmd_generate(
    bands: usize,
    anchor_x: f64,
    anchor_y: f64,
    seed: u32,
    demo: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let params = VocoderParams {
        band_count: bands,
        anchor: Position::new(anchor_x, anchor_y),
        seed,
        demo_content: demo,
    };

    let mut doc = MemoryDocument::new();
    let report = build_vocoder(&mut doc, &params)?;

    let json = if pretty {
        doc.to_json_pretty()?
    } else {
        doc.to_json()?
    };

    match &output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    eprintln!(
        "{} {} bands ({}-{} Hz), {} splitters per tree, {} nodes, {} connections{}",
        "generated:".green().bold(),
        report.band_count,
        report.frequencies.first().copied().unwrap_or_default(),
        report.frequencies.last().copied().unwrap_or_default(),
        report.splitters_per_tree,
        doc.node_count(),
        doc.connection_count(),
        if report.demo_tracks > 0 {
            format!(", {} demo tracks", report.demo_tracks)
        } else {
            String::new()
        },
    );
    if let Some(path) = output {
        eprintln!("  wrote {}", path.display().to_string().cyan());
    }
    Ok(())
}
