use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::RegexBuilder;

use crate::errors::Result;
use crate::line::Line;
use crate::request::InspectionRequest;

/// Quote character applied to files recognized as csv.
const CSV_QUOTE: char = '"';

/// Lazily yields [`Line`]s from a source file.
///
/// The sequence is finite, tied to the underlying reader, and not
/// restartable; re-reading a file means constructing a new loader. A `.csv`
/// extension (case-insensitive) makes every line quote-aware, any other
/// extension builds quote-naive lines.
pub struct LineLoader {
    reader: Box<dyn BufRead>,
    quote: Option<char>,
    request: InspectionRequest,
}

impl LineLoader {
    pub fn new(path: impl AsRef<Path>, request: &InspectionRequest) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let quote = is_csv_path(path).then_some(CSV_QUOTE);

        Ok(LineLoader {
            reader: Box::new(reader),
            quote,
            request: request.clone(),
        })
    }

    /// Loader over an arbitrary reader, quote-aware when `quoted` is set.
    pub fn from_reader<R: BufRead + 'static>(
        reader: R,
        quoted: bool,
        request: &InspectionRequest,
    ) -> Self {
        LineLoader {
            reader: Box::new(reader),
            quote: quoted.then_some(CSV_QUOTE),
            request: request.clone(),
        }
    }

    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    /// Consume the loader, yielding lines as they're read.
    pub fn load(self) -> impl Iterator<Item = Result<Line>> {
        let LineLoader {
            reader,
            quote,
            request,
        } = self;

        reader.lines().map(move |content| {
            let content = content?;
            Ok(match quote {
                Some(q) => Line::with_quote(content, q, &request),
                None => Line::new(content, &request),
            })
        })
    }
}

pub(crate) fn is_csv_path(path: &Path) -> bool {
    let regex = RegexBuilder::new(r"^.*\.(csv)$")
        .case_insensitive(true)
        .build()
        .expect("regex to build");

    path.file_name()
        .map(|name| regex.is_match(&name.to_string_lossy()))
        .unwrap_or(false)
}
