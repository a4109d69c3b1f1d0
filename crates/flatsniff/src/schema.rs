use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resolved type for a column.
///
/// `Text` is the fallback for columns where no candidate type was accepted;
/// it's the only type that carries an explicit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Boolean,
    Int64,
    Float64,
    Date,
    Timestamp,
    Uuid,
    Text,
}

impl FieldType {
    pub const fn is_text(&self) -> bool {
        matches!(self, FieldType::Text)
    }
}

/// A column as declared before inspection.
///
/// `length` holds the raw provisional length string and `field_type` stays
/// unset until the inspector resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub length: String,
    pub field_type: Option<FieldType>,
    /// Whether values for this column may be quoted in the source file.
    pub quoted: bool,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            length: String::new(),
            field_type: None,
            quoted: false,
        }
    }

    pub fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }
}

/// Everything known about a source file prior to type inspection.
///
/// `delimiter: None` signals a single-column file with no splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInformation {
    pub path: PathBuf,
    pub delimiter: Option<char>,
    pub first_row_is_header: bool,
    pub fields: Vec<Field>,
}

impl FileInformation {
    pub fn new(
        path: impl Into<PathBuf>,
        delimiter: Option<char>,
        first_row_is_header: bool,
        fields: Vec<Field>,
    ) -> Self {
        FileInformation {
            path: path.into(),
            delimiter,
            first_row_is_header,
            fields,
        }
    }

    /// Identifier used in diagnostics, derived from the file stem.
    pub fn identifier(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Inspector output for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredField {
    pub name: String,
    pub field_type: FieldType,
    /// Set only when `field_type` is the text fallback.
    pub length: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_from_stem() {
        let info = FileInformation::new("/tmp/orders.csv", Some(','), true, Vec::new());
        assert_eq!("orders", info.identifier());
    }

    #[test]
    fn new_field_is_unresolved() {
        let field = Field::new("City");
        assert_eq!(None, field.field_type);
        assert!(field.length.is_empty());
        assert!(!field.quoted);
        assert!(Field::new("City").quoted().quoted);
    }
}
