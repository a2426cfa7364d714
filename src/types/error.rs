use thiserror::Error;

use crate::parse::RuleSyntaxError;

/// Errors reading an actor or fact from its one-line text form.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("actor name is empty")]
    EmptyName,

    #[error("unbalanced substitution brackets in '{pattern}'")]
    UnbalancedSubstitution { pattern: String },

    #[error("invalid rule: {0}")]
    Rule(#[from] RuleSyntaxError),
}
