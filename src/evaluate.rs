use crate::{Expr, Taggable};

pub(crate) fn evaluate<T: Taggable + ?Sized>(expr: &Expr, entity: &T) -> bool {
    match expr {
        Expr::True => true,
        Expr::False => false,
        Expr::Tag(tag) => entity.has_tag(tag),
        Expr::Name(name) => entity.name() == name,
        Expr::Not(inner) => !evaluate(inner, entity),
        Expr::And(children) => children.iter().all(|c| evaluate(c, entity)),
        Expr::Or(children) => children.iter().any(|c| evaluate(c, entity)),
    }
}
