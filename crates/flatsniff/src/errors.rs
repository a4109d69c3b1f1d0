#[derive(Debug, thiserror::Error)]
pub enum SniffError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Row {line} has {got} values, expected {expected}")]
    MalformedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("Probe '{id}' missing from sample row")]
    MissingProbe { id: String },

    #[error("Probe references unknown field '{field}'")]
    UnknownField { field: String },
}

pub type Result<T, E = SniffError> = std::result::Result<T, E>;
