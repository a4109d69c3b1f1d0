use tracing::{debug, warn};

use crate::errors::{Result, SniffError};
use crate::probe::{Probe, ProbeBatch, RowTransformRunner, SampleRun};
use crate::request::InspectionRequest;
use crate::schema::{FieldType, FileInformation, InferredField};

/// Orchestrates one inference run: builds the probe batch, drives the sample
/// through a [`RowTransformRunner`], and applies the type-selection ladder.
///
/// A candidate type is accepted for a field only when its convert probe held
/// on every retained row; the first accepted candidate in request order wins
/// and implies the storage width, so the length is cleared. A field with no
/// accepted candidate falls back to text sized at the max observed length
/// plus the request's margin.
///
/// A zero-row sample accepts no candidate type. The vacuous universal-truth
/// reading would make the result depend on candidate order for empty files;
/// instead every field resolves to text sized at the margin alone.
#[derive(Debug)]
pub struct FieldInspector<R: RowTransformRunner> {
    runner: R,
}

impl<R: RowTransformRunner> FieldInspector<R> {
    pub fn new(runner: R) -> Self {
        FieldInspector { runner }
    }

    /// Resolve a type (and length, for text) for every field.
    ///
    /// Returns a fresh list; the caller's `FileInformation` is not touched.
    /// Runner errors propagate unmodified, runner warnings are forwarded as
    /// log events and never abort.
    pub fn inspect(
        &self,
        info: &FileInformation,
        request: &InspectionRequest,
    ) -> Result<Vec<InferredField>> {
        let batch = ProbeBatch::build(info, request);
        debug!(
            identifier = %info.identifier(),
            fields = batch.fields.len(),
            probes = batch.probes.len(),
            sample = batch.sample,
            top = batch.top,
            ?batch,
            "submitting probe batch"
        );

        let run = self.runner.run(&batch)?;
        for warning in &run.warnings {
            warn!(%warning, identifier = %info.identifier(), "row transform warning");
        }

        let mut inferred = Vec::with_capacity(info.fields.len());
        for field in &info.fields {
            inferred.push(self.resolve_field(&field.name, request, &run)?);
        }

        Ok(inferred)
    }

    fn resolve_field(
        &self,
        name: &str,
        request: &InspectionRequest,
        run: &SampleRun,
    ) -> Result<InferredField> {
        if !run.rows.is_empty() {
            for candidate in &request.types {
                let id = Probe::convert(name, *candidate).id;
                let mut all = true;
                for row in &run.rows {
                    let value = row
                        .get(&id)
                        .ok_or_else(|| SniffError::MissingProbe { id: id.clone() })?;
                    if !value.as_bool().unwrap_or(false) {
                        all = false;
                        break;
                    }
                }
                if all {
                    return Ok(InferredField {
                        name: name.to_string(),
                        field_type: candidate.as_field_type(),
                        length: None,
                    });
                }
            }
        }

        // Text fallback.
        let id = Probe::length(name).id;
        let mut max_length = 0i64;
        for row in &run.rows {
            let value = row
                .get(&id)
                .ok_or_else(|| SniffError::MissingProbe { id: id.clone() })?;
            max_length = max_length.max(value.as_int().unwrap_or(0));
        }

        Ok(InferredField {
            name: name.to_string(),
            field_type: FieldType::Text,
            length: Some(max_length as usize + request.text_length_margin),
        })
    }
}
