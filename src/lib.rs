//! A small boolean rule language over named, tagged entities.
//!
//! ```text
//! bear                  entity is tagged "bear"
//! @Baloo                entity is named "Baloo"
//! !toy                  negation
//! (bear, big, !toy)     all of
//! [@Baloo, little bear] any of
//! ```
//!
//! ```
//! use tagrule::{parse, Actor};
//!
//! let rule = parse("(bear, !@Winnie-The-Pooh, !toy)").unwrap();
//! let pooh = Actor::new("Winnie-The-Pooh").with_tags(["bear", "toy"]);
//! let baloo = Actor::new("Baloo").with_tags(["bear", "big"]);
//!
//! assert!(!rule.evaluate(&pooh));
//! assert!(rule.evaluate(&baloo));
//! ```

mod catalog;
mod error;
mod evaluate;
pub mod parse;
mod types;

pub use catalog::Catalog;
pub use error::TagruleError;
pub use parse::{parse, ErrorKind, Group, RuleSyntaxError, MAX_DEPTH};
pub use types::{name, tag, Actor, Expr, Fact, FormatError, Taggable, PLACEHOLDER};
