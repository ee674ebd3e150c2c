//! Class name set
//!
//! Insertion-ordered, duplicate-free collection of CSS class names.

use indexmap::IndexSet;

/// Ordered set of class names as they first appear in a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNameSet(IndexSet<String>);

impl ClassNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class name. Returns `false` if it was already present,
    /// in which case its original position is kept.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ClassNameSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
