use std::collections::HashSet;

use crate::types::{parses_as_date, parses_as_timestamp};

/// Judges whether a header row is usable as column names.
///
/// A data row masquerading as a header (a row of numeric ids, say) has to be
/// rejected so the caller can substitute positional names instead of
/// corrupting the schema. Pure predicate; the input is never mutated.
#[derive(Debug, Clone)]
pub struct ColumnNameValidator {
    names: Vec<String>,
    count: usize,
    distinct_count: usize,
}

impl ColumnNameValidator {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = names.len();
        let distinct_count = names.iter().collect::<HashSet<_>>().len();

        ColumnNameValidator {
            names,
            count,
            distinct_count,
        }
    }

    pub fn valid(&self) -> bool {
        self.are_distinct()
            && !self.contain_blank()
            && !self.contain_number()
            && !self.contain_datetime()
            && !self.contain_uuid()
    }

    fn are_distinct(&self) -> bool {
        self.count == self.distinct_count
    }

    fn contain_blank(&self) -> bool {
        self.names.iter().any(|n| n.trim().is_empty())
    }

    fn contain_number(&self) -> bool {
        self.names.iter().any(|n| n.parse::<f64>().is_ok())
    }

    fn contain_datetime(&self) -> bool {
        self.names
            .iter()
            .any(|n| parses_as_date(n) || parses_as_timestamp(n))
    }

    fn contain_uuid(&self) -> bool {
        self.names.iter().any(|n| uuid::Uuid::parse_str(n).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(names: &[&str]) -> bool {
        ColumnNameValidator::new(names.iter().copied()).valid()
    }

    #[test]
    fn accepts_plain_names() {
        assert!(valid(&["Name", "Age", "City"]));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(!valid(&["Name", "Age", "Name"]));
    }

    #[test]
    fn rejects_blank_entries() {
        assert!(!valid(&["Name", "", "City"]));
        assert!(!valid(&["Name", "   ", "City"]));
    }

    #[test]
    fn rejects_numeric_entries() {
        assert!(!valid(&["1", "2", "3"]));
        assert!(!valid(&["Name", "2.5", "City"]));
    }

    #[test]
    fn rejects_datetime_entries() {
        assert!(!valid(&["Name", "2024-01-31", "City"]));
        assert!(!valid(&["Name", "2024-01-31 10:30:00", "City"]));
    }

    #[test]
    fn rejects_uuid_entries() {
        assert!(!valid(&["Name", "9790b103-5e49-4b3c-96e9-79818b4917b7"]));
    }

    #[test]
    fn empty_header_is_valid_vacuously() {
        // No names, nothing to object to; callers guard for zero columns.
        assert!(valid(&[]));
    }
}
