use serde::{Deserialize, Serialize};

use crate::types::CandidateType;

/// Caller-constructed parameters bounding a single inference run.
///
/// Total inspection work is bounded by `sample * field_count * types.len()`;
/// size these deliberately for large files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionRequest {
    /// Max rows read from the file when sampling.
    pub sample: usize,
    /// Max sampled rows retained for probe evaluation.
    pub top: usize,
    /// Candidate types in priority order, most specific first.
    pub types: Vec<CandidateType>,
    /// Delimiter characters under consideration, preferred first.
    pub delimiters: Vec<char>,
    /// Added to the max observed length on the text fallback.
    pub text_length_margin: usize,
}

impl Default for InspectionRequest {
    fn default() -> Self {
        InspectionRequest {
            sample: 100,
            top: 100,
            types: CandidateType::LADDER.to_vec(),
            delimiters: vec![',', '\t', ';', '|'],
            text_length_margin: 1,
        }
    }
}
