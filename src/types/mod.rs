mod actor;
mod error;
mod expr;
mod fact;
mod taggable;

pub use actor::Actor;
pub use error::FormatError;
pub use expr::{name, tag, Expr};
pub use fact::{Fact, PLACEHOLDER};
pub use taggable::Taggable;
