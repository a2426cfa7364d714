use thiserror::Error;

use crate::FormatError;

/// Error returned by the loading methods on [`Catalog`](crate::Catalog).
///
/// Rule syntax errors reach it through [`FormatError::Rule`].
#[derive(Debug, Error)]
pub enum TagruleError {
    #[error("line {line}: {source}")]
    Line { line: usize, source: FormatError },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
