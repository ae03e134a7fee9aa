use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Run configuration loaded from environment variables.
/// Every value has a default, so an empty environment reproduces the fixed
/// `persona_job.json` / `input/` / `output/output.json` layout.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_spec_path: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    /// Log and skip PDFs that fail to parse instead of aborting the run.
    pub skip_unreadable_pdfs: bool,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            job_spec_path: PathBuf::from("persona_job.json"),
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            output_file: "output.json".to_string(),
            skip_unreadable_pdfs: false,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let skip_unreadable_pdfs = match lookup("SKIP_UNREADABLE_PDFS") {
            Some(raw) => parse_bool("SKIP_UNREADABLE_PDFS", &raw)?,
            None => defaults.skip_unreadable_pdfs,
        };

        Ok(Config {
            job_spec_path: lookup("JOB_SPEC_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.job_spec_path),
            input_dir: lookup("INPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_dir),
            output_dir: lookup("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            output_file: lookup("OUTPUT_FILE").unwrap_or(defaults.output_file),
            skip_unreadable_pdfs,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Full path of the report file.
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.output_file)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{key} must be a boolean (true/false), got '{other}'"),
    }
}
