use std::collections::HashMap;

use crate::request::InspectionRequest;

/// One raw line of a source file, pre-split under every delimiter of
/// interest.
///
/// Splitting happens once at construction so delimiter comparison later is an
/// O(1) map lookup instead of a re-parse. Quote-aware lines preserve
/// delimiter characters inside quoted fields and treat a doubled quote as a
/// literal quote, per csv convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    content: String,
    quote: Option<char>,
    values: HashMap<char, Vec<String>>,
}

impl Line {
    /// Quote-naive line; every delimiter occurrence splits.
    pub fn new(content: String, request: &InspectionRequest) -> Self {
        let values = request
            .delimiters
            .iter()
            .map(|&delimiter| (delimiter, naive_split(&content, delimiter)))
            .collect();

        Line {
            content,
            quote: None,
            values,
        }
    }

    /// Quote-aware line.
    pub fn with_quote(content: String, quote: char, request: &InspectionRequest) -> Self {
        let values = request
            .delimiters
            .iter()
            .map(|&delimiter| (delimiter, quoted_split(&content, delimiter, quote)))
            .collect();

        Line {
            content,
            quote: Some(quote),
            values,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    /// Pre-split values for a delimiter, `None` if the delimiter wasn't part
    /// of the originating request.
    pub fn values(&self, delimiter: char) -> Option<&[String]> {
        self.values.get(&delimiter).map(|v| v.as_slice())
    }
}

fn naive_split(content: &str, delimiter: char) -> Vec<String> {
    content.split(delimiter).map(|s| s.to_string()).collect()
}

/// Split one line honoring quoting rules for the given quote character.
///
/// Backed by a `csv_core::Reader` configured for the delimiter/quote pair.
/// Non-ascii delimiters or quotes fall back to the naive split since csv-core
/// operates on single bytes.
fn quoted_split(content: &str, delimiter: char, quote: char) -> Vec<String> {
    if !delimiter.is_ascii() || !quote.is_ascii() {
        return naive_split(content, delimiter);
    }
    // csv-core skips blank lines; keep the single-empty-value shape of the
    // naive split instead.
    if content.is_empty() {
        return vec![String::new()];
    }

    let mut reader = csv_core::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .quote(quote as u8)
        .build();

    // read_record only completes a record on a terminator.
    let mut input = Vec::with_capacity(content.len() + 1);
    input.extend_from_slice(content.as_bytes());
    input.push(b'\n');

    let mut output = vec![0u8; input.len()];
    let mut ends = vec![0usize; input.len() + 1];

    let (result, _, _, ends_written) = reader.read_record(&input, &mut output, &mut ends);

    match result {
        csv_core::ReadRecordResult::Record => {
            let mut fields = Vec::with_capacity(ends_written);
            let mut start = 0;
            for &end in ends.iter().take(ends_written) {
                fields.push(String::from_utf8_lossy(&output[start..end]).into_owned());
                start = end;
            }
            fields
        }
        // Unbalanced quotes or a stuck reader; the naive split at least
        // yields something inspectable.
        _ => naive_split(content, delimiter),
    }
}
