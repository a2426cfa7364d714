use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::{FormatError, Taggable};

/// A named entity with a set of tags.
///
/// The text form is `name | tag1, tag2`; the `|` and tag list are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    name: String,
    tags: BTreeSet<String>,
}

impl Actor {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            tags: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags.extend(tags.into_iter().map(str::to_owned));
        self
    }

    /// Add a tag. Returns `false` if the actor already had it.
    pub fn insert_tag(&mut self, tag: &str) -> bool {
        self.tags.insert(tag.to_owned())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

impl Taggable for Actor {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl FromStr for Actor {
    type Err = FormatError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, tags) = match line.split_once('|') {
            Some((name, tags)) => (name, Some(tags)),
            None => (line, None),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(FormatError::EmptyName);
        }
        let tags = tags
            .into_iter()
            .flat_map(|t| t.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty());
        Ok(Actor::new(name).with_tags(tags))
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        let mut tags = self.tags();
        if let Some(first) = tags.next() {
            write!(f, " | {first}")?;
            for tag in tags {
                write!(f, ", {tag}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_name_only() {
        let actor: Actor = "  Book  ".parse().unwrap();
        assert_eq!(actor.name(), "Book");
        assert!(!actor.has_tags());
    }

    #[test]
    fn read_name_and_tags() {
        let actor: Actor = "Baloo | bear, big ,  jungle book".parse().unwrap();
        assert_eq!(actor.name(), "Baloo");
        assert_eq!(
            actor.tags().collect::<Vec<_>>(),
            vec!["bear", "big", "jungle book"]
        );
        assert!(actor.has_tag("jungle book"));
    }

    #[test]
    fn read_ignores_empty_tags() {
        let actor: Actor = "Kaa |, snake,,".parse().unwrap();
        assert_eq!(actor.tags().collect::<Vec<_>>(), vec!["snake"]);
    }

    #[test]
    fn read_empty_name_fails() {
        assert!(matches!(" | bear".parse::<Actor>(), Err(FormatError::EmptyName)));
        assert!(matches!("".parse::<Actor>(), Err(FormatError::EmptyName)));
    }

    #[test]
    fn duplicate_tags_collapse() {
        let mut actor = Actor::new("Pooh").with_tags(["bear", "bear"]);
        assert_eq!(actor.tags().count(), 1);
        assert!(!actor.insert_tag("bear"));
        assert!(actor.insert_tag("toy"));
    }

    #[test]
    fn display_writes_line_format() {
        let actor = Actor::new("Winnie-The-Pooh").with_tags(["toy", "bear"]);
        assert_eq!(actor.to_string(), "Winnie-The-Pooh | bear, toy");
        assert_eq!(Actor::new("Book").to_string(), "Book");
    }

    #[test]
    fn display_reads_back() {
        let actor = Actor::new("Baloo").with_tags(["bear", "big"]);
        let again: Actor = actor.to_string().parse().unwrap();
        assert_eq!(actor, again);
    }
}
