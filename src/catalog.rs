use std::path::Path;
use std::str::FromStr;

use crate::{Actor, Fact, FormatError, Taggable, TagruleError};

/// The actors and facts loaded from a pair of line-oriented lists.
///
/// Each non-blank line that does not start with `#` holds one entry: an
/// actor as `name | tag, tag`, a fact as `pattern | rule`.
///
/// # Example
///
/// ```
/// use tagrule::Catalog;
///
/// let catalog = Catalog::from_strs(
///     "Winnie-The-Pooh | bear, toy\nBaloo | bear, big",
///     "# facts\n%s likes honey. | (bear, !big)\n%s is huge. | big",
/// )
/// .unwrap();
///
/// let pooh = catalog.actor("Winnie-The-Pooh").unwrap();
/// let facts: Vec<_> = catalog.facts_about(pooh).map(|f| f.about(pooh)).collect();
/// assert_eq!(facts, ["Winnie-The-Pooh likes honey."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    actors: Vec<Actor>,
    facts: Vec<Fact>,
}

impl Catalog {
    #[must_use]
    pub fn new(actors: Vec<Actor>, facts: Vec<Fact>) -> Self {
        Self { actors, facts }
    }

    /// Read actors and facts from their text lists.
    ///
    /// # Errors
    ///
    /// Returns [`TagruleError::Line`] for the first malformed line.
    pub fn from_strs(actors: &str, facts: &str) -> Result<Self, TagruleError> {
        let catalog = Self::new(read_lines(actors)?, read_lines(facts)?);
        tracing::debug!(
            actors = catalog.actors.len(),
            facts = catalog.facts.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Read actors and facts from files.
    ///
    /// # Errors
    ///
    /// Returns [`TagruleError`] on I/O failure or a malformed line.
    pub fn from_files(
        actors: impl AsRef<Path>,
        facts: impl AsRef<Path>,
    ) -> Result<Self, TagruleError> {
        let (actors, facts) = (actors.as_ref(), facts.as_ref());
        tracing::debug!(actors = %actors.display(), facts = %facts.display(), "reading catalog");
        let actors = std::fs::read_to_string(actors)?;
        let facts = std::fs::read_to_string(facts)?;
        Self::from_strs(&actors, &facts)
    }

    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// The first actor with exactly this name.
    #[must_use]
    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name() == name)
    }

    /// Facts applicable to `actor`, in list order.
    pub fn facts_about<'a, T: Taggable + ?Sized>(
        &'a self,
        actor: &'a T,
    ) -> impl Iterator<Item = &'a Fact> + 'a {
        self.facts.iter().filter(move |f| f.is_applicable_to(actor))
    }
}

fn read_lines<T>(text: &str) -> Result<Vec<T>, TagruleError>
where
    T: FromStr<Err = FormatError>,
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim_start();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            line.parse()
                .map_err(|source| TagruleError::Line { line: i + 1, source })
        })
        .collect()
}
