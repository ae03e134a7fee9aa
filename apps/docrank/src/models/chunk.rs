use serde::{Deserialize, Serialize};

/// A retained block of PDF text with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub document: String,
    /// 1-based.
    pub page_number: u32,
    /// 0-based position of the block within its page.
    pub block_index: usize,
    pub section_title: String,
    pub text: String,
}

/// A chunk paired with its 1-based importance rank and similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedChunk {
    pub chunk: Chunk,
    pub rank: u32,
    pub score: f64,
}
