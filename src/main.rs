mod batch;
mod config;
mod error;
mod index;
mod page;
mod parser;
mod render;
mod shell;
mod sitemap;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::shell::SiteShell;

#[derive(Parser)]
#[command(name = "phrasebook", about = "Render phrase-collection markdown into static HTML pages")]
struct Cli {
    /// Settings file (default: ./phrasebook.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every document in the source directory, plus listing and sitemap
    Build {
        /// Source directory of *.md documents
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max documents to render (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render one document to stdout
    Render {
        file: PathBuf,
    },
    /// Show metadata and section classification of one document
    Inspect {
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            source,
            output,
            limit,
            json,
        } => {
            let settings = settings.with_dirs(source, output);
            let shell = SiteShell::new(&settings);
            let report = batch::run(&settings, &shell, limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
                let elapsed = t0.elapsed();
                if elapsed.as_secs() >= 1 {
                    println!("\nDone in {}", format_duration(elapsed));
                }
            }
        }
        Commands::Render { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let shell = SiteShell::new(&settings);
            match page::render_document(&text, &settings, &shell) {
                Ok((_, html)) => print!("{}", html),
                Err(e) if e.is_skip() => {
                    eprintln!("Skipped {}: no slug in metadata block.", file.display());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Inspect { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let doc = parser::parse_document(&text);
            println!("{}", serde_json::to_string_pretty(&doc.meta)?);
            println!(
                "structured data: {}",
                if doc.structured_data.is_empty() { "none" } else { "present" }
            );
            let model = page::build_model(doc);
            if model.sections.is_empty() {
                println!("No sections.");
            }
            for s in &model.sections {
                println!("{:>6} | {:<14} | {}", s.id, s.kind.as_str(), s.header);
            }
        }
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
