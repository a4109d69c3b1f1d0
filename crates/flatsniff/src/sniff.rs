use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::line::Line;
use crate::loader::LineLoader;
use crate::request::InspectionRequest;
use crate::schema::{Field, FileInformation};
use crate::validator::ColumnNameValidator;

/// Pick the delimiter for a sampled prefix of a file.
///
/// A candidate qualifies when every sampled line splits into the same number
/// of values and that number is at least 2. Among qualifying candidates the
/// one producing the most values wins; earlier request order breaks ties.
/// `None` means a single-column file.
pub fn sniff_delimiter(lines: &[Line], request: &InspectionRequest) -> Option<char> {
    // Best delimiter chosen so far alongside number of values it splits into.
    let mut best: (Option<char>, usize) = (None, 1);

    for &delimiter in &request.delimiters {
        let mut counts = lines.iter().filter_map(|line| line.values(delimiter)).map(|v| v.len());

        let first = match counts.next() {
            Some(n) => n,
            None => continue,
        };

        // Splitting into a single value is trivial.
        if first < 2 {
            continue;
        }

        // Every sampled line must agree on the count.
        if counts.any(|n| n != first) {
            continue;
        }

        if first > best.1 {
            best = (Some(delimiter), first);
        }
    }

    best.0
}

impl FileInformation {
    /// Build a [`FileInformation`] by sniffing a bounded sample of the file.
    ///
    /// Reads up to `request.sample` lines, picks the delimiter, and runs the
    /// header row through [`ColumnNameValidator`]. A usable header supplies
    /// the field names; otherwise positional `Field1..FieldN` names are
    /// generated and the first row is treated as data.
    pub fn sniff(path: impl AsRef<Path>, request: &InspectionRequest) -> Result<Self> {
        let path = path.as_ref();
        let loader = LineLoader::new(path, request)?;
        let quote = loader.quote();

        let lines: Vec<Line> = loader
            .load()
            .take(request.sample)
            .collect::<Result<_>>()?;

        let delimiter = sniff_delimiter(&lines, request);
        debug!(path = %path.display(), ?delimiter, sampled = lines.len(), "sniffed file");

        let (first_row_is_header, fields) = match lines.first() {
            None => (false, Vec::new()),
            Some(first) => {
                let values: Vec<String> = match delimiter {
                    Some(d) => first.values(d).unwrap_or_default().to_vec(),
                    None => vec![first.content().to_string()],
                };

                let validator = ColumnNameValidator::new(values.iter().cloned());
                if validator.valid() {
                    (true, values.into_iter().map(Field::new).collect())
                } else {
                    let fields = (1..=values.len())
                        .map(|idx| Field::new(format!("Field{idx}")))
                        .collect();
                    (false, fields)
                }
            }
        };

        let fields = if quote.is_some() {
            fields.into_iter().map(Field::quoted).collect()
        } else {
            fields
        };

        Ok(FileInformation::new(path, delimiter, first_row_is_header, fields))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn sample_lines(input: &str, request: &InspectionRequest) -> Vec<Line> {
        LineLoader::from_reader(Cursor::new(input.to_string()), true, request)
            .load()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn sniff_delimiter_ok() {
        struct TestCase {
            input: &'static str,
            expected: Option<char>,
        }

        let test_cases = [
            // Simple
            TestCase {
                input: "a,b,c\nd,e,f\n",
                expected: Some(','),
            },
            // Alt delimiter
            TestCase {
                input: "a|b|c\nd|e|f\n",
                expected: Some('|'),
            },
            // Quoted delimiter doesn't break the count
            TestCase {
                input: "a,\"b,c\",d\ne,f,g\n",
                expected: Some(','),
            },
            // Inconsistent counts for every delimiter
            TestCase {
                input: "a,b,c\nd,e\n",
                expected: None,
            },
            // Single column
            TestCase {
                input: "alpha\nbeta\n",
                expected: None,
            },
            // More fields wins over request order
            TestCase {
                input: "a|b|c,d\ne|f|g,h\n",
                expected: Some('|'),
            },
        ];

        for tc in test_cases {
            let request = InspectionRequest::default();
            let lines = sample_lines(tc.input, &request);
            assert_eq!(
                tc.expected,
                sniff_delimiter(&lines, &request),
                "input {:?}",
                tc.input
            );
        }
    }

    fn write_temp(suffix: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("flatsniff_{}{suffix}", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn sniff_file_with_header() {
        let path = write_temp(".csv", "Name,Age,City\nmario,35,Brooklyn\nluigi,34,Brooklyn\n");
        let info = FileInformation::sniff(&path, &InspectionRequest::default()).unwrap();

        assert_eq!(Some(','), info.delimiter);
        assert!(info.first_row_is_header);
        assert_eq!(
            vec!["Name", "Age", "City"],
            info.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
        );
        assert!(info.fields.iter().all(|f| f.quoted));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn sniff_file_without_header_generates_positional_names() {
        let path = write_temp(".csv", "1,2,3\n4,5,6\n");
        let info = FileInformation::sniff(&path, &InspectionRequest::default()).unwrap();

        assert!(!info.first_row_is_header);
        assert_eq!(
            vec!["Field1", "Field2", "Field3"],
            info.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn sniff_single_column_txt() {
        let path = write_temp(".txt", "alpha\nbeta\ngamma\n");
        let info = FileInformation::sniff(&path, &InspectionRequest::default()).unwrap();

        assert_eq!(None, info.delimiter);
        assert!(info.first_row_is_header);
        assert_eq!(1, info.fields.len());
        assert_eq!("alpha", info.fields[0].name);
        assert!(!info.fields[0].quoted);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn sniff_empty_file() {
        let path = write_temp(".csv", "");
        let info = FileInformation::sniff(&path, &InspectionRequest::default()).unwrap();

        assert_eq!(None, info.delimiter);
        assert!(!info.first_row_is_header);
        assert!(info.fields.is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn request_order_breaks_ties() {
        // Both ',' and '|' split consistently into 2; ',' comes first.
        let request = InspectionRequest::default();
        let lines = sample_lines("a,b|c\nd,e|f\n", &request);

        // Each line has one ',' and one '|', both consistent with 2 values.
        assert_eq!(Some(','), sniff_delimiter(&lines, &request));
    }
}
