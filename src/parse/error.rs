use std::fmt;

use thiserror::Error;

/// The two kinds of composite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// `( ... )`, every element must match.
    All,
    /// `[ ... ]`, at least one element must match.
    Any,
}

impl Group {
    #[must_use]
    pub fn open(self) -> char {
        match self {
            Group::All => '(',
            Group::Any => '[',
        }
    }

    #[must_use]
    pub fn close(self) -> char {
        match self {
            Group::All => ')',
            Group::Any => ']',
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::All => write!(f, "'(' group"),
            Group::Any => write!(f, "'[' group"),
        }
    }
}

/// What went wrong while parsing a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("expected a rule, found end of input")]
    UnexpectedEnd,

    #[error("unexpected character '{0}' at start of rule")]
    UnexpectedChar(char),

    #[error("expected a name or tag, found nothing")]
    EmptyText,

    #[error("{0} is not closed")]
    Unterminated(Group),

    #[error("{group} closed by '{found}', expected '{}'", group.close())]
    MismatchedClose { group: Group, found: char },

    #[error("{0} contains no rules")]
    EmptyGroup(Group),

    #[error("empty rule between separators")]
    EmptyClause,

    #[error("expected ',' or '{}' in {group}, found '{found}'", group.close())]
    ExpectedSeparator { group: Group, found: char },

    #[error("unexpected '{0}' after complete rule")]
    TrailingInput(char),

    #[error("rule nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// A rule string that could not be parsed.
///
/// `offset` counts characters, not bytes, from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSyntaxError {
    kind: ErrorKind,
    offset: usize,
}

impl RuleSyntaxError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for RuleSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rule syntax error at offset {}: {}",
            self.offset, self.kind
        )
    }
}

impl std::error::Error for RuleSyntaxError {}
