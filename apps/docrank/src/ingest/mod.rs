// Document ingestion: job spec loading, PDF discovery, page text, and chunking.

pub mod extractor;
pub mod loader;
pub mod pdf;
