//! Chunk Extractor — turns each PDF page into layout blocks and keeps the
//! blocks long enough to be worth scoring.
//!
//! Page text comes from a `PageSource`. Blocks are runs of non-blank lines;
//! one or more blank lines separate blocks. Short blocks (headers, footers,
//! page numbers) are dropped by the word-count filter.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::ingest::pdf::PageSource;
use crate::models::chunk::Chunk;

/// A block is kept only if it has strictly more words than this.
pub const MIN_WORDS_EXCLUSIVE: usize = 20;
/// Hard character cut for the derived section title.
pub const MAX_TITLE_CHARS: usize = 60;

pub struct ChunkExtractor<'a> {
    source: &'a dyn PageSource,
    skip_unreadable: bool,
}

impl<'a> ChunkExtractor<'a> {
    pub fn new(source: &'a dyn PageSource, skip_unreadable: bool) -> Self {
        Self {
            source,
            skip_unreadable,
        }
    }

    /// Extracts chunks from every named PDF in `dir`, in the order given.
    /// Output order: document, then page, then block within page.
    pub fn extract_all(&self, dir: &Path, documents: &[String]) -> Result<Vec<Chunk>, AppError> {
        let mut chunks = Vec::new();

        for name in documents {
            match self.extract_document(dir, name) {
                Ok(doc_chunks) => {
                    info!("{name}: {} chunk(s) retained", doc_chunks.len());
                    chunks.extend(doc_chunks);
                }
                Err(e @ AppError::PdfParse { .. }) if self.skip_unreadable => {
                    warn!("Skipping unreadable PDF: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Extracted {} chunk(s) from {} document(s)",
            chunks.len(),
            documents.len()
        );
        Ok(chunks)
    }

    pub fn extract_document(&self, dir: &Path, name: &str) -> Result<Vec<Chunk>, AppError> {
        let pages = self.source.pages(&dir.join(name))?;
        let mut chunks = Vec::new();

        for (page_idx, page_text) in pages.iter().enumerate() {
            let page_number = (page_idx + 1) as u32;
            let blocks = split_blocks(page_text);
            debug!("{name} page {page_number}: {} block(s)", blocks.len());

            for (block_index, block) in blocks.into_iter().enumerate() {
                let text = block.trim();
                if word_count(text) <= MIN_WORDS_EXCLUSIVE {
                    continue;
                }
                chunks.push(Chunk {
                    document: name.to_string(),
                    page_number,
                    block_index,
                    section_title: section_title(text),
                    text: text.to_string(),
                });
            }
        }

        Ok(chunks)
    }
}

/// Splits page text into blocks separated by blank lines.
/// Line breaks inside a block are kept.
pub fn split_blocks(page_text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in page_text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First line of the (already trimmed) text, cut to `MAX_TITLE_CHARS` chars.
pub fn section_title(text: &str) -> String {
    text.split('\n')
        .next()
        .unwrap_or_default()
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct FakeSource(HashMap<String, Vec<String>>);

    impl PageSource for FakeSource {
        fn pages(&self, path: &Path) -> Result<Vec<String>, AppError> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            self.0.get(&name).cloned().ok_or(AppError::PdfParse {
                path: path.to_path_buf(),
                message: "not a PDF".to_string(),
            })
        }
    }

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_split_blocks_on_blank_lines() {
        let page = "Title line\nsecond line\n\n   \nNext block\n\n\nLast";
        let blocks = split_blocks(page);
        assert_eq!(
            blocks,
            vec![
                "Title line\nsecond line".to_string(),
                "Next block".to_string(),
                "Last".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_blocks_empty_page() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_word_threshold_is_strictly_greater_than_20() {
        let source = FakeSource(HashMap::from([(
            "doc.pdf".to_string(),
            vec![format!("{}\n\n{}", words(20, "short"), words(21, "long"))],
        )]));
        let extractor = ChunkExtractor::new(&source, false);
        let chunks = extractor.extract_document(Path::new("in"), "doc.pdf").unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(word_count(&chunks[0].text), 21);
        assert_eq!(chunks[0].block_index, 1);
    }

    #[test]
    fn test_long_first_line_truncated_to_60_chars() {
        let first_line = "A".repeat(75);
        let text = format!("{first_line}\n{}", words(25, "body"));
        let title = section_title(&text);
        assert_eq!(title.chars().count(), 60);
        assert_eq!(title, "A".repeat(60));
    }

    #[test]
    fn test_title_truncation_respects_multibyte_chars() {
        let title = section_title(&"é".repeat(80));
        assert_eq!(title.chars().count(), 60);
    }

    #[test]
    fn test_short_first_line_kept_whole() {
        assert_eq!(section_title("Packing Tips\nrest of block"), "Packing Tips");
    }

    #[test]
    fn test_page_numbers_are_one_based_and_text_trimmed() {
        let source = FakeSource(HashMap::from([(
            "guide.pdf".to_string(),
            vec![
                "page one footer".to_string(),
                format!("  {}  \n\n", words(22, "coast")),
            ],
        )]));
        let extractor = ChunkExtractor::new(&source, false);
        let chunks = extractor.extract_document(Path::new("in"), "guide.pdf").unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].page_number, 2);
        assert_eq!(chunks[0].document, "guide.pdf");
        assert!(!chunks[0].text.starts_with(' '));
        assert!(!chunks[0].text.ends_with(' '));
    }

    #[test]
    fn test_unreadable_pdf_is_fatal_by_default() {
        let source = FakeSource(HashMap::new());
        let extractor = ChunkExtractor::new(&source, false);
        let err = extractor
            .extract_all(Path::new("in"), &["bad.pdf".to_string()])
            .unwrap_err();
        match err {
            AppError::PdfParse { path, .. } => assert_eq!(path, PathBuf::from("in/bad.pdf")),
            other => panic!("expected PdfParse, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_pdf_skipped_when_enabled() {
        let source = FakeSource(HashMap::from([(
            "good.pdf".to_string(),
            vec![words(30, "museum")],
        )]));
        let extractor = ChunkExtractor::new(&source, true);
        let chunks = extractor
            .extract_all(
                Path::new("in"),
                &["bad.pdf".to_string(), "good.pdf".to_string()],
            )
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].document, "good.pdf");
    }

    #[test]
    fn test_chunk_order_follows_document_page_block() {
        let source = FakeSource(HashMap::from([
            (
                "a.pdf".to_string(),
                vec![
                    format!("{}\n\n{}", words(21, "a1"), words(21, "a2")),
                    words(21, "a3"),
                ],
            ),
            ("b.pdf".to_string(), vec![words(21, "b1")]),
        ]));
        let extractor = ChunkExtractor::new(&source, false);
        let chunks = extractor
            .extract_all(Path::new("in"), &["a.pdf".to_string(), "b.pdf".to_string()])
            .unwrap();

        let keys: Vec<_> = chunks
            .iter()
            .map(|c| (c.document.as_str(), c.page_number, c.block_index))
            .collect();
        assert_eq!(
            keys,
            vec![("a.pdf", 1, 0), ("a.pdf", 1, 1), ("a.pdf", 2, 0), ("b.pdf", 1, 0)]
        );
    }
}
