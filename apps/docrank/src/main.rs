mod config;
mod errors;
mod ingest;
mod models;
mod pipeline;
mod ranking;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::pdf::PdfExtractSource;
use crate::pipeline::Pipeline;
use crate::ranking::tfidf::TfIdfScorer;
use crate::report::builder::current_timestamp;

fn main() -> Result<ExitCode> {
    // Load configuration first (fails on invalid values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting docrank v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Job spec: {}, input: {}, output: {}",
        config.job_spec_path.display(),
        config.input_dir.display(),
        config.output_path().display()
    );

    let pipeline = Pipeline::new(&config, &PdfExtractSource, &TfIdfScorer);

    match pipeline.run(current_timestamp()) {
        Ok((report, path)) => {
            info!(
                "Wrote {} ranked section(s) to {}",
                report.extracted_sections.len(),
                path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(code = e.code(), "{e}");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
