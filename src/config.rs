use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File, Map};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = "phrasebook";
const ENV_PREFIX: &str = "PHRASEBOOK";
/// URL path every phrase page and the listing live under.
pub const PHRASES_PATH: &str = "/real-phrases/";

/// Site-level settings, injected into the assemblers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site_name: String,
    pub site_url: String,
    /// Brand name used by the source documents, rewritten to `site_name`.
    pub brand_alias: String,
    /// Max characters of a listing card's description.
    pub description_budget: usize,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            site_name: "英語学習サービス比較ナビ".to_string(),
            site_url: "https://native-real.com".to_string(),
            brand_alias: "Native Real".to_string(),
            description_budget: 80,
            source_dir: PathBuf::from("content/real-phrases"),
            output_dir: PathBuf::from("public/real-phrases"),
        }
    }
}

impl Settings {
    /// Defaults, then `phrasebook.toml` (or `path`), then `PHRASEBOOK_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// `load`, reading the environment layer from `env` instead of the process
    /// environment when given.
    fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::with_name(DEFAULT_CONFIG).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    /// Command-line directories win over every other layer.
    pub fn with_dirs(mut self, source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(dir) = source {
            self.source_dir = dir;
        }
        if let Some(dir) = output {
            self.output_dir = dir;
        }
        self
    }

    pub fn listing_url(&self) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), PHRASES_PATH)
    }

    pub fn canonical_url(&self, slug: &str) -> String {
        format!("{}{}/", self.listing_url(), slug)
    }
}
