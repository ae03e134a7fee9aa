use serde::{Deserialize, Serialize};

// Field order is the serialized key order of the output file.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub page_number: u32,
    pub section_title: String,
    pub importance_rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

/// The single output artifact of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub sub_section_analysis: Vec<SubSectionAnalysis>,
}
