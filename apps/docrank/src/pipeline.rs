//! One run: load job → list PDFs → extract chunks → rank → write report.
//! Every stage receives its inputs explicitly; nothing outlives the call.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::ingest::extractor::ChunkExtractor;
use crate::ingest::loader::{list_pdfs, load_job_spec};
use crate::ingest::pdf::PageSource;
use crate::models::report::Report;
use crate::ranking::ranker::{rank_chunks, RelevanceScorer, TOP_N};
use crate::report::builder::{build_report, write_report};

pub struct Pipeline<'a> {
    config: &'a Config,
    source: &'a dyn PageSource,
    scorer: &'a dyn RelevanceScorer,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        source: &'a dyn PageSource,
        scorer: &'a dyn RelevanceScorer,
    ) -> Self {
        Self {
            config,
            source,
            scorer,
        }
    }

    /// Runs every stage and writes the report. Returns the written report and
    /// its path. Any error aborts before the output file is touched.
    pub fn run(&self, timestamp: String) -> Result<(Report, PathBuf), AppError> {
        let job = load_job_spec(&self.config.job_spec_path)?;
        let documents = list_pdfs(&self.config.input_dir)?;

        let extractor = ChunkExtractor::new(self.source, self.config.skip_unreadable_pdfs);
        let chunks = extractor.extract_all(&self.config.input_dir, &documents)?;

        let ranked = rank_chunks(&job.query(), &chunks, self.scorer, TOP_N)?;
        if let Some(top) = ranked.first() {
            info!(
                "Top section: {} p.{} (score {:.4})",
                top.chunk.document, top.chunk.page_number, top.score
            );
        }

        let report = build_report(&job, documents, timestamp, &ranked);
        let path = self.config.output_path();
        write_report(&report, &path)?;

        Ok((report, path))
    }
}
