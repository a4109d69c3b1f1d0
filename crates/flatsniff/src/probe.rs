use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SniffError};
use crate::loader::LineLoader;
use crate::request::InspectionRequest;
use crate::schema::FileInformation;
use crate::types::CandidateType;

/// Per-row computation requested from a [`RowTransformRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeKind {
    /// Does the raw value convert to this candidate type?
    Convert(CandidateType),
    /// Character length of the raw value.
    Length,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe {
    pub id: String,
    pub field: String,
    pub kind: ProbeKind,
}

impl Probe {
    pub fn convert(field: &str, candidate: CandidateType) -> Self {
        Probe {
            id: format!("{field}Is{}", candidate.name()),
            field: field.to_string(),
            kind: ProbeKind::Convert(candidate),
        }
    }

    pub fn length(field: &str) -> Self {
        Probe {
            id: format!("{field}Length"),
            field: field.to_string(),
            kind: ProbeKind::Length,
        }
    }
}

/// Declarative batch submitted to a runner: which file, which fields, which
/// probes, and how much of the file to touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeBatch {
    pub path: PathBuf,
    /// Declared fields in column order.
    pub fields: Vec<String>,
    pub probes: Vec<Probe>,
    /// Max rows read from the file.
    pub sample: usize,
    /// Max rows returned.
    pub top: usize,
    pub delimiter: Option<char>,
    pub skip_header: bool,
}

impl ProbeBatch {
    /// One convert probe per (candidate type, field) plus one length probe
    /// per field.
    pub fn build(info: &FileInformation, request: &InspectionRequest) -> Self {
        let fields: Vec<String> = info.fields.iter().map(|f| f.name.clone()).collect();

        let mut probes = Vec::with_capacity(fields.len() * (request.types.len() + 1));
        for candidate in &request.types {
            for field in &fields {
                probes.push(Probe::convert(field, *candidate));
            }
        }
        for field in &fields {
            probes.push(Probe::length(field));
        }

        ProbeBatch {
            path: info.path.clone(),
            fields,
            probes,
            sample: request.sample,
            top: request.top,
            delimiter: info.delimiter,
            skip_header: info.first_row_is_header,
        }
    }
}

/// Scalar computed for one probe on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeValue {
    Bool(bool),
    Int(i64),
}

impl ProbeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Bool(_) => None,
        }
    }
}

/// Evaluated probe batch: one probe-id to value map per retained row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRun {
    pub rows: Vec<HashMap<String, ProbeValue>>,
    /// Informational only; never aborts inspection.
    pub warnings: Vec<String>,
}

/// Executes a probe batch over a bounded sample of rows.
///
/// The runner alone parses rows under the chosen delimiter/quote rules.
/// Errors propagate to the caller unmodified; warnings ride along in the
/// result.
pub trait RowTransformRunner {
    fn run(&self, batch: &ProbeBatch) -> Result<SampleRun>;
}

/// File-backed runner splitting rows through [`LineLoader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTransformRunner;

impl RowTransformRunner for FileTransformRunner {
    fn run(&self, batch: &ProbeBatch) -> Result<SampleRun> {
        let request = InspectionRequest {
            sample: batch.sample,
            top: batch.top,
            delimiters: batch.delimiter.into_iter().collect(),
            ..Default::default()
        };
        let loader = LineLoader::new(&batch.path, &request)?;

        // Resolve probe fields to column indexes once.
        let index_of: HashMap<&str, usize> = batch
            .fields
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();
        for probe in &batch.probes {
            if !index_of.contains_key(probe.field.as_str()) {
                return Err(SniffError::UnknownField {
                    field: probe.field.clone(),
                });
            }
        }

        let skip = usize::from(batch.skip_header);
        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (idx, line) in loader.load().enumerate().skip(skip).take(batch.sample) {
            let line = line?;
            let values: Vec<String> = match batch.delimiter {
                Some(d) => line.values(d).unwrap_or_default().to_vec(),
                None => vec![line.content().to_string()],
            };

            if values.len() < batch.fields.len() {
                return Err(SniffError::MalformedRow {
                    line: idx + 1,
                    expected: batch.fields.len(),
                    got: values.len(),
                });
            }
            if values.len() > batch.fields.len() {
                warnings.push(format!(
                    "row {} has {} values, keeping the first {}",
                    idx + 1,
                    values.len(),
                    batch.fields.len()
                ));
            }

            let mut row = HashMap::with_capacity(batch.probes.len());
            for probe in &batch.probes {
                let value = &values[index_of[probe.field.as_str()]];
                let computed = match probe.kind {
                    ProbeKind::Convert(candidate) => ProbeValue::Bool(candidate.try_convert(value)),
                    ProbeKind::Length => ProbeValue::Int(value.chars().count() as i64),
                };
                row.insert(probe.id.clone(), computed);
            }
            rows.push(row);
        }

        rows.truncate(batch.top);

        Ok(SampleRun { rows, warnings })
    }
}
