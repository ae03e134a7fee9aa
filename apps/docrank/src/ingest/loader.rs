use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobSpec;

const PDF_EXTENSION: &str = ".pdf";

/// Reads the persona / job-to-be-done record.
/// A missing file, invalid JSON, or a missing/non-string key is a `Config` error.
pub fn load_job_spec(path: &Path) -> Result<JobSpec, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!(
            "Cannot read job specification '{}': {e}",
            path.display()
        ))
    })?;

    let job: JobSpec = serde_json::from_str(&raw).map_err(|e| {
        AppError::Config(format!(
            "Invalid job specification '{}': {e}",
            path.display()
        ))
    })?;

    info!(
        "Loaded job specification: persona={:?}, job={:?}",
        job.persona, job.job_to_be_done
    );
    Ok(job)
}

/// Lists the file names in `dir` ending in `.pdf`, sorted lexicographically.
/// Zero PDFs is not an error here.
pub fn list_pdfs(dir: &Path) -> Result<Vec<String>, AppError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        AppError::Config(format!("Cannot read input directory '{}': {e}", dir.display()))
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::Internal(e.into()))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue; // non UTF-8 names cannot be reported in the JSON output
        };
        if !name.ends_with(PDF_EXTENSION) {
            continue;
        }
        if entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();

    info!("Found {} PDF(s) in {}", names.len(), dir.display());
    Ok(names)
}
