//! Schema inference for delimited flat files.
//!
//! Steps:
//!
//! - Sniff the delimiter: split a bounded sample of lines under every
//!   delimiter of interest and keep the one with a consistent, maximal value
//!   count ([`sniff::sniff_delimiter`]).
//!
//! - Judge the header: a first row only supplies column names when the names
//!   are distinct, non-blank, and don't parse as numbers, dates, or UUIDs
//!   ([`validator::ColumnNameValidator`]).
//!
//! - Infer types: declare a probe batch (one conversion probe per field and
//!   candidate type, one length probe per field), evaluate it over the sample
//!   through a [`probe::RowTransformRunner`], and accept for each field the
//!   first candidate whose probe held on every row. Fields with no accepted
//!   candidate fall back to text sized at the max observed length plus a
//!   margin ([`inspector::FieldInspector`]).
//!
//! Inference never loads data; the output is a finalized field list intended
//! for downstream schema generation.

pub mod errors;
pub mod inspector;
pub mod line;
pub mod loader;
pub mod probe;
pub mod request;
pub mod schema;
pub mod sniff;
pub mod types;
pub mod validator;
