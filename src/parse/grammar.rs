use winnow::error::{AddContext, ContextError, ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::Expr;

use super::error::{ErrorKind, Group};

type PResult<O> = ModalResult<O, ContextError<ErrorKind>>;

/// Deepest nesting of `!`, `(` and `[` accepted in one rule.
pub const MAX_DEPTH: usize = 128;

/// Characters that never belong to a name or tag.
pub(crate) const RESERVED: [char; 7] = [',', '[', ']', '(', ')', '!', '@'];

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_closer(c: char) -> bool {
    c == ')' || c == ']'
}

fn peek(input: &&str) -> Option<char> {
    input.chars().next()
}

fn bump(input: &mut &str) -> PResult<char> {
    any.parse_next(input)
}

/// Abort the whole parse at the current position.
fn fail_with<O>(input: &mut &str, kind: ErrorKind) -> PResult<O> {
    let here = input.checkpoint();
    Err(ErrMode::Cut(
        ContextError::new().add_context(&*input, &here, kind),
    ))
}

// -- Whitespace & text ------------------------------------------------------

fn ws(input: &mut &str) -> PResult<()> {
    take_while(0.., is_blank).void().parse_next(input)
}

fn text_run<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(0.., |c: char| !is_reserved(c)).parse_next(input)
}

/// A run of non-reserved characters with surrounding blanks trimmed.
/// Internal blanks are kept, so `little bear` is a single token.
fn text<'i>(input: &mut &'i str) -> PResult<&'i str> {
    let start = input.checkpoint();
    let raw = text_run(input)?;
    let trimmed = raw.trim_matches(is_blank);
    if trimmed.is_empty() {
        input.reset(&start);
        return fail_with(input, ErrorKind::EmptyText);
    }
    Ok(trimmed)
}

// -- Rules ------------------------------------------------------------------

fn name(input: &mut &str) -> PResult<Expr> {
    bump(input)?;
    let name = text(input)?;
    Ok(Expr::Name(name.to_owned()))
}

fn tag(input: &mut &str) -> PResult<Expr> {
    let tag = text(input)?;
    Ok(Expr::Tag(tag.to_owned()))
}

fn negation(input: &mut &str, depth: usize) -> PResult<Expr> {
    bump(input)?;
    let inner = rule(input, depth)?;
    Ok(Expr::Not(Box::new(inner)))
}

fn group(input: &mut &str, group: Group, depth: usize) -> PResult<Expr> {
    bump(input)?;
    let mut children = Vec::new();

    loop {
        ws.parse_next(input)?;
        match peek(input) {
            None => return fail_with(input, ErrorKind::Unterminated(group)),
            Some(',') => return fail_with(input, ErrorKind::EmptyClause),
            // only reachable after a separator
            Some(c) if is_closer(c) && !children.is_empty() => {
                return fail_with(input, ErrorKind::EmptyClause);
            }
            Some(c) if c == group.close() => {
                return fail_with(input, ErrorKind::EmptyGroup(group));
            }
            Some(c) if is_closer(c) => {
                return fail_with(input, ErrorKind::MismatchedClose { group, found: c });
            }
            Some(_) => {}
        }

        children.push(rule(input, depth)?);

        ws.parse_next(input)?;
        match peek(input) {
            Some(',') => {
                bump(input)?;
            }
            Some(c) if c == group.close() => {
                bump(input)?;
                break;
            }
            Some(c) if is_closer(c) => {
                return fail_with(input, ErrorKind::MismatchedClose { group, found: c });
            }
            Some(c) => {
                return fail_with(input, ErrorKind::ExpectedSeparator { group, found: c });
            }
            None => return fail_with(input, ErrorKind::Unterminated(group)),
        }
    }

    Ok(match group {
        Group::All => Expr::And(children),
        Group::Any => Expr::Or(children),
    })
}

/// One rule, dispatched on its first non-blank character. `depth` counts
/// the `!`, `(` and `[` already open around it.
fn rule(input: &mut &str, depth: usize) -> PResult<Expr> {
    ws.parse_next(input)?;
    let next = peek(input);
    if matches!(next, Some('!' | '(' | '[')) && depth >= MAX_DEPTH {
        return fail_with(input, ErrorKind::TooDeep { limit: MAX_DEPTH });
    }
    match next {
        Some('@') => name(input),
        Some('!') => negation(input, depth + 1),
        Some('(') => group(input, Group::All, depth + 1),
        Some('[') => group(input, Group::Any, depth + 1),
        Some(c) if is_reserved(c) => fail_with(input, ErrorKind::UnexpectedChar(c)),
        Some(_) => tag(input),
        None => fail_with(input, ErrorKind::UnexpectedEnd),
    }
}

// -- Top-level parser -------------------------------------------------------

/// A complete rule string: exactly one rule, optionally surrounded by blanks.
pub fn rule_text(input: &mut &str) -> PResult<Expr> {
    let expr = rule(input, 0)?;
    ws.parse_next(input)?;
    if let Some(c) = peek(input) {
        return fail_with(input, ErrorKind::TrailingInput(c));
    }
    Ok(expr)
}
