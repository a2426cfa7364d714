mod error;
mod grammar;

pub use error::{ErrorKind, Group, RuleSyntaxError};
pub use grammar::MAX_DEPTH;

use crate::Expr;

/// Parse a rule string into an [`Expr`].
///
/// The whole input must be a single rule; blanks (spaces and tabs) around
/// tokens are ignored. Nesting is limited to [`MAX_DEPTH`] levels.
///
/// # Errors
///
/// Returns [`RuleSyntaxError`] if the input is not a valid rule.
pub fn parse(input: &str) -> Result<Expr, RuleSyntaxError> {
    use winnow::Parser;
    match grammar::rule_text.parse(input) {
        Ok(expr) => {
            tracing::trace!(rule = input, ?expr, "parsed rule");
            Ok(expr)
        }
        Err(e) => {
            let offset = e.offset();
            let kind = e.inner().context().next().cloned().unwrap_or_else(|| {
                match input[offset..].chars().next() {
                    Some(c) => ErrorKind::TrailingInput(c),
                    None => ErrorKind::UnexpectedEnd,
                }
            });
            let err = RuleSyntaxError::new(kind, input[..offset].chars().count());
            tracing::debug!(rule = input, %err, "rejected rule");
            Err(err)
        }
    }
}
