use std::ops::Not;

use super::Taggable;

/// A parsed rule: a boolean predicate over an entity's name and tags.
///
/// Equality is structural, so `And([a, b]) != And([b, a])` even though both
/// evaluate the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    True,
    False,
    /// Matches entities carrying the tag.
    Tag(String),
    /// Matches the entity with exactly this name (case-sensitive).
    Name(String),
    Not(Box<Expr>),
    /// Matches when every child matches. The parser never builds an empty list.
    And(Vec<Expr>),
    /// Matches when any child matches. The parser never builds an empty list.
    Or(Vec<Expr>),
}

impl Expr {
    /// Evaluate this rule against an entity.
    ///
    /// `And` and `Or` stop at the first child that decides the result.
    #[must_use]
    pub fn evaluate<T: Taggable + ?Sized>(&self, entity: &T) -> bool {
        crate::evaluate::evaluate(self, entity)
    }

    /// Conjunction of `self` and `other`, in that order.
    #[must_use]
    pub fn and(self, other: Expr) -> Expr {
        Expr::And(vec![self, other])
    }

    /// Disjunction of `self` and `other`, in that order.
    #[must_use]
    pub fn or(self, other: Expr) -> Expr {
        Expr::Or(vec![self, other])
    }

    /// Conjunction of all `exprs`, in iteration order.
    #[must_use]
    pub fn all(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Disjunction of all `exprs`, in iteration order.
    #[must_use]
    pub fn any(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

impl std::str::FromStr for Expr {
    type Err = crate::parse::RuleSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

#[must_use]
pub fn tag(tag: &str) -> Expr {
    Expr::Tag(tag.to_owned())
}

#[must_use]
pub fn name(name: &str) -> Expr {
    Expr::Name(name.to_owned())
}
