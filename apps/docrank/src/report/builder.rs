use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::errors::AppError;
use crate::models::chunk::RankedChunk;
use crate::models::job::JobSpec;
use crate::models::report::{ExtractedSection, Report, ReportMetadata, SubSectionAnalysis};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Assembles the report. `ranked` must already be in rank order; both section
/// lists follow it entry for entry.
pub fn build_report(
    job: &JobSpec,
    input_documents: Vec<String>,
    timestamp: String,
    ranked: &[RankedChunk],
) -> Report {
    let extracted_sections = ranked
        .iter()
        .map(|r| ExtractedSection {
            document: r.chunk.document.clone(),
            page_number: r.chunk.page_number,
            section_title: r.chunk.section_title.clone(),
            importance_rank: r.rank,
        })
        .collect();

    let sub_section_analysis = ranked
        .iter()
        .map(|r| SubSectionAnalysis {
            document: r.chunk.document.clone(),
            refined_text: r.chunk.text.clone(),
            page_number: r.chunk.page_number,
        })
        .collect();

    Report {
        metadata: ReportMetadata {
            input_documents,
            persona: job.persona.clone(),
            job_to_be_done: job.job_to_be_done.clone(),
            timestamp,
        },
        extracted_sections,
        sub_section_analysis,
    }
}

/// Writes the report as pretty JSON (2-space indent, non-ASCII unescaped).
/// The parent directory is created if missing. The file is written to a
/// temporary sibling and renamed into place, so a failed write leaves no
/// partial report behind.
pub fn write_report(report: &Report, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| AppError::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|source| AppError::OutputWrite {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!("Output saved to {}", path.display());
    Ok(())
}
