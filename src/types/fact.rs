use std::str::FromStr;

use super::{Expr, FormatError, Taggable};

/// Marks where the actor's name goes in a fact pattern.
pub const PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Actor,
    Choice(Vec<String>),
}

/// A sentence pattern about an actor, guarded by a rule.
///
/// The text form is `pattern | rule`. The pattern may contain the
/// [`PLACEHOLDER`] and substitutions such as `[big, beautiful]`, of which one
/// choice is rendered. Without a rule part the fact applies to every actor.
///
/// ```
/// use tagrule::{Actor, Fact};
///
/// let fact: Fact = "%s is a [big, tall] tree. | (big, tree)".parse().unwrap();
/// let oak = Actor::new("The oak").with_tags(["big", "tree"]);
///
/// assert!(fact.is_applicable_to(&oak));
/// assert_eq!(fact.about(&oak), "The oak is a big tree.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pattern: String,
    rule: Expr,
    segments: Vec<Segment>,
}

impl Fact {
    /// # Errors
    ///
    /// Returns [`FormatError::UnbalancedSubstitution`] if the pattern has a
    /// stray or nested `[`/`]`.
    pub fn new(pattern: &str, rule: Expr) -> Result<Self, FormatError> {
        Ok(Self {
            pattern: pattern.to_owned(),
            rule,
            segments: segments(pattern)?,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn rule(&self) -> &Expr {
        &self.rule
    }

    /// Whether the pattern mentions an actor at all, in plain text or in any
    /// substitution choice.
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.segments.iter().any(|s| match s {
            Segment::Text(_) => false,
            Segment::Actor => true,
            Segment::Choice(choices) => choices.iter().any(|c| c.contains(PLACEHOLDER)),
        })
    }

    /// A fact applies to an actor when it has a place for one and its rule
    /// accepts the actor.
    #[must_use]
    pub fn is_applicable_to<T: Taggable + ?Sized>(&self, actor: &T) -> bool {
        self.has_placeholder() && self.rule.evaluate(actor)
    }

    /// Render the fact about `actor`. For each substitution, `choose` is given
    /// the choices and returns the index to use (wrapped to the choice count).
    /// A [`PLACEHOLDER`] inside the chosen text is filled in as well.
    pub fn render_with<T, F>(&self, actor: &T, mut choose: F) -> String
    where
        T: Taggable + ?Sized,
        F: FnMut(&[String]) -> usize,
    {
        let mut out = String::with_capacity(self.pattern.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Actor => out.push_str(actor.name()),
                Segment::Choice(choices) => {
                    let index = choose(choices) % choices.len();
                    out.push_str(&choices[index].replace(PLACEHOLDER, actor.name()));
                }
            }
        }
        out
    }

    /// Render the fact about `actor`, taking the first choice of every
    /// substitution.
    #[must_use]
    pub fn about<T: Taggable + ?Sized>(&self, actor: &T) -> String {
        self.render_with(actor, |_| 0)
    }
}

impl FromStr for Fact {
    type Err = FormatError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.split_once('|') {
            Some((pattern, rule)) => Fact::new(pattern.trim(), crate::parse::parse(rule)?),
            None => Fact::new(line.trim(), Expr::True),
        }
    }
}

fn segments(pattern: &str) -> Result<Vec<Segment>, FormatError> {
    let unbalanced = || FormatError::UnbalancedSubstitution {
        pattern: pattern.to_owned(),
    };

    let mut segments = Vec::new();
    let mut rest = pattern;
    while let Some(open) = rest.find(['[', ']']) {
        if rest[open..].starts_with(']') {
            return Err(unbalanced());
        }
        push_text(&mut segments, &rest[..open]);

        let body = &rest[open + 1..];
        let close = body
            .find(['[', ']'])
            .filter(|&i| body[i..].starts_with(']'))
            .ok_or_else(unbalanced)?;
        let choices = body[..close]
            .split(',')
            .map(|c| c.trim().to_owned())
            .collect();
        segments.push(Segment::Choice(choices));
        rest = &body[close + 1..];
    }
    push_text(&mut segments, rest);
    Ok(segments)
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    for (i, part) in text.split(PLACEHOLDER).enumerate() {
        if i > 0 {
            segments.push(Segment::Actor);
        }
        if !part.is_empty() {
            segments.push(Segment::Text(part.to_owned()));
        }
    }
}
