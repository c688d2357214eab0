//! paintdoc CLI - document normalization tool
//!
//! Reads a document JSON blob (file or stdin), runs the total parse,
//! and writes the canonical wire JSON back out. Garbage in, skeleton
//! out; the exit code only reflects I/O and encoding failures.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use paintdoc::{JsonFormat, NormalizeOptions};

#[derive(Parser)]
#[command(name = "paintdoc")]
#[command(version)]
#[command(about = "Normalize and canonicalize paint-catalog document JSON", long_about = None)]
struct Cli {
    /// Input JSON file (stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Drop items with unrecognized type tags instead of coercing them
    #[arg(long)]
    drop_unknown: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize a document to wire JSON (the default)
    Json {
        /// Input JSON file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the plain-text projection of a document
    Text {
        /// Input JSON file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show document statistics
    Info {
        /// Input JSON file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = build_options(cli.drop_unknown);

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(input.as_deref(), output.as_deref(), compact, &options),
        Some(Commands::Text { input }) => cmd_text(input.as_deref(), &options),
        Some(Commands::Info { input }) => cmd_info(input.as_deref(), &options),
        None => cmd_json(
            cli.input.as_deref(),
            cli.output.as_deref(),
            cli.compact,
            &options,
        ),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(drop_unknown: bool) -> NormalizeOptions {
    let options = NormalizeOptions::new();
    if drop_unknown {
        options.drop_unknown()
    } else {
        options
    }
}

fn read_input(input: Option<&Path>) -> paintdoc::Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> paintdoc::Result<()> {
    match output {
        Some(path) => fs::write(path, content)?,
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_json(
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
    options: &NormalizeOptions,
) -> paintdoc::Result<()> {
    let raw = read_input(input)?;
    let doc = paintdoc::parse_str(&raw, options);
    log::debug!("parsed {} sections", doc.section_count());
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = paintdoc::to_json(&doc, options, format)?;
    write_output(output, &json)
}

fn cmd_text(input: Option<&Path>, options: &NormalizeOptions) -> paintdoc::Result<()> {
    let raw = read_input(input)?;
    let doc = paintdoc::parse_str(&raw, options);
    println!("{}", doc.plain_text());
    Ok(())
}

fn cmd_info(input: Option<&Path>, options: &NormalizeOptions) -> paintdoc::Result<()> {
    let raw = read_input(input)?;
    let doc = paintdoc::parse_str(&raw, options);
    let stats = doc.stats();

    println!("{}", "Document".bold());
    println!("  version:     {}", doc.version);
    println!("  time:        {}", doc.time);
    println!("  sections:    {}", stats.sections);
    println!();
    println!("{}", "Items".bold());
    println!("  headers:     {}", stats.headers);
    println!("  text:        {}", stats.text_items);
    println!("  steps:       {} ({} sub-steps)", stats.step_items, stats.steps);
    println!("  images:      {}", stats.image_items);
    println!();
    println!("{}", "Paints".bold());
    let ids = doc.paint_ids();
    println!("  referenced:  {}", stats.paint_refs);
    if !ids.is_empty() {
        let list: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        println!("  ids:         {}", list.join(", "));
    }
    Ok(())
}
