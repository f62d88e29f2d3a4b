use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::DocumentError;
use crate::index::render_index;
use crate::page::render_document;
use crate::parser::meta::DocumentMeta;
use crate::shell::PageShell;
use crate::sitemap::render_sitemap;

const CHUNK_SIZE: usize = 200;

/// Result of one source file.
#[derive(Debug)]
pub enum Outcome {
    Rendered {
        file: String,
        meta: DocumentMeta,
        html: String,
    },
    Skipped {
        file: String,
    },
    Failed {
        file: String,
        error: DocumentError,
    },
}

#[derive(Debug, Serialize)]
pub struct FailedDocument {
    pub file: String,
    pub error: String,
}

/// Tally of a batch run. Nothing in here aborted the run.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub rendered: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedDocument>,
}

impl BatchReport {
    pub fn print(&self) {
        println!(
            "Rendered {} pages ({} skipped, {} failed).",
            self.rendered.len(),
            self.skipped.len(),
            self.failed.len(),
        );
        for f in &self.failed {
            println!("  {}: {}", f.file, f.error);
        }
    }
}

/// `*.md` files directly under `dir`, sorted by name.
pub fn collect_sources(dir: &Path, limit: Option<usize>) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read source directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read, parse and render one file. Never panics on bad input.
pub fn process_file(path: &Path, settings: &Settings, shell: &(dyn PageShell + Sync)) -> Outcome {
    let file = file_name(path);
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(source) => {
            return Outcome::Failed {
                file,
                error: DocumentError::Read {
                    path: path.to_path_buf(),
                    source,
                },
            }
        }
    };

    match render_document(&text, settings, shell) {
        Ok((meta, html)) => Outcome::Rendered { file, meta, html },
        Err(e) if e.is_skip() => Outcome::Skipped { file },
        Err(error) => Outcome::Failed { file, error },
    }
}

fn write_page(output_dir: &Path, slug: &str, html: &str) -> Result<(), DocumentError> {
    let dir = output_dir.join(slug);
    let path = dir.join("index.html");
    std::fs::create_dir_all(&dir)
        .and_then(|_| std::fs::write(&path, html))
        .map_err(|source| DocumentError::Write { path, source })
}

/// Render every source document, then the listing page and sitemap.
///
/// Per-document problems land in the report; only failures to read the
/// source directory or write the listing/sitemap abort the run.
pub fn run(
    settings: &Settings,
    shell: &(dyn PageShell + Sync),
    limit: Option<usize>,
) -> Result<BatchReport> {
    let files = collect_sources(&settings.source_dir, limit)?;
    info!(count = files.len(), source = %settings.source_dir.display(), "Rendering documents");
    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!("Failed to create output directory {}", settings.output_dir.display())
    })?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut report = BatchReport::default();
    let mut listed: Vec<DocumentMeta> = Vec::new();
    let mut written: HashSet<String> = HashSet::new();

    for chunk in files.chunks(CHUNK_SIZE) {
        let outcomes: Vec<Outcome> = chunk
            .par_iter()
            .map(|path| process_file(path, settings, shell))
            .collect();

        for outcome in outcomes {
            match outcome {
                Outcome::Rendered { file, meta, html } => {
                    // Rendered implies a validated slug.
                    let slug = meta.slug.clone().unwrap_or_default();
                    if written.contains(&slug) {
                        let error = DocumentError::DuplicateSlug(slug);
                        warn!(file = %file, error = %error, "Not overwriting an earlier page");
                        report.failed.push(FailedDocument {
                            file,
                            error: error.to_string(),
                        });
                        continue;
                    }
                    match write_page(&settings.output_dir, &slug, &html) {
                        Ok(()) => {
                            written.insert(slug.clone());
                            report.rendered.push(slug);
                            listed.push(meta);
                        }
                        Err(error) => {
                            warn!(file = %file, error = %error, "Failed to write page");
                            report.failed.push(FailedDocument {
                                file,
                                error: error.to_string(),
                            });
                        }
                    }
                }
                Outcome::Skipped { file } => {
                    warn!(file = %file, "Skipping document without slug");
                    report.skipped.push(file);
                }
                Outcome::Failed { file, error } => {
                    warn!(file = %file, error = %error, "Failed to render document");
                    report.failed.push(FailedDocument {
                        file,
                        error: error.to_string(),
                    });
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    let index_path = settings.output_dir.join("index.html");
    std::fs::write(&index_path, render_index(&listed, settings, shell))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    let mut slugs = report.rendered.clone();
    slugs.sort();
    let sitemap_path = settings.output_dir.join("sitemap.xml");
    let sitemap = render_sitemap(settings, &slugs, chrono::Local::now().date_naive())?;
    std::fs::write(&sitemap_path, sitemap)
        .with_context(|| format!("Failed to write {}", sitemap_path.display()))?;

    info!(
        rendered = report.rendered.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Batch finished"
    );
    Ok(report)
}
