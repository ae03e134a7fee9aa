//! Page text source: given a PDF path, produce one text string per page.

use std::fs;
use std::panic;
use std::path::Path;

use crate::errors::AppError;

/// Seam for the PDF text capability. Pages are returned in document order;
/// index 0 is page 1.
pub trait PageSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, AppError>;
}

/// `pdf-extract` backed page source.
pub struct PdfExtractSource;

impl PageSource for PdfExtractSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, AppError> {
        let bytes = fs::read(path).map_err(|e| AppError::PdfParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // pdf-extract panics on some malformed inputs rather than returning Err.
        let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(AppError::PdfParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => Err(AppError::PdfParse {
                path: path.to_path_buf(),
                message: "PDF parser panicked".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_are_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf at all").unwrap();

        let err = PdfExtractSource.pages(&path).unwrap_err();
        match err {
            AppError::PdfParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected PdfParse, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfExtractSource.pages(&dir.path().join("gone.pdf")).unwrap_err();
        assert!(matches!(err, AppError::PdfParse { .. }));
    }
}
