use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schema::FieldType;

/// Candidate types used when trying to infer the type of a column.
///
/// Variants are ordered from the narrowest to the widest type. `Text` is
/// deliberately absent; it's the fallback when no candidate is accepted, not
/// a candidate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CandidateType {
    /// Boolean type, strictest.
    Boolean,
    /// 64-bit integer.
    Int64,
    /// 64-bit float, also covers decimal-looking values.
    Float64,
    /// Calendar date literal.
    Date,
    /// Date-time literal.
    Timestamp,
    /// UUID/GUID literal.
    Uuid,
}

impl CandidateType {
    /// Default ladder, most specific first.
    pub const LADDER: &'static [CandidateType] = &[
        CandidateType::Boolean,
        CandidateType::Int64,
        CandidateType::Float64,
        CandidateType::Date,
        CandidateType::Timestamp,
        CandidateType::Uuid,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int64 => "Int64",
            Self::Float64 => "Float64",
            Self::Date => "Date",
            Self::Timestamp => "Timestamp",
            Self::Uuid => "Uuid",
        }
    }

    pub const fn as_field_type(&self) -> FieldType {
        match self {
            Self::Boolean => FieldType::Boolean,
            Self::Int64 => FieldType::Int64,
            Self::Float64 => FieldType::Float64,
            Self::Date => FieldType::Date,
            Self::Timestamp => FieldType::Timestamp,
            Self::Uuid => FieldType::Uuid,
        }
    }

    /// Check if this candidate type is valid for some raw input.
    pub fn try_convert(&self, input: &str) -> bool {
        match self {
            Self::Boolean => input.parse::<bool>().is_ok(),
            Self::Int64 => input.parse::<i64>().is_ok(),
            Self::Float64 => input.parse::<f64>().is_ok(),
            Self::Date => parses_as_date(input),
            Self::Timestamp => parses_as_timestamp(input),
            Self::Uuid => uuid::Uuid::parse_str(input).is_ok(),
        }
    }
}

pub(crate) fn parses_as_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDate::parse_from_str(s, "%m/%d/%Y").is_ok()
}

pub(crate) fn parses_as_timestamp(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
}
