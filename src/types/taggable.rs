/// Anything a rule can be evaluated against: a name and a set of tags.
pub trait Taggable {
    fn name(&self) -> &str;

    fn has_tag(&self, tag: &str) -> bool;

    /// True if the entity carries at least one of `tags`.
    fn is_tagged_with_any<'a>(&self, tags: impl IntoIterator<Item = &'a str>) -> bool
    where
        Self: Sized,
    {
        tags.into_iter().any(|t| self.has_tag(t))
    }
}

impl<T: Taggable + ?Sized> Taggable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn has_tag(&self, tag: &str) -> bool {
        (**self).has_tag(tag)
    }
}
