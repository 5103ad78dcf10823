// src/registry/mod.rs
// Ordered list of named elements. The registry's length defines both axes
// of the matrix; identity is positional, so names may repeat and may be
// empty.

use serde::{Deserialize, Serialize};

/// A named entity forming one row/column identity of the matrix.
///
/// Only the name is stored; an element's identity is its index in the
/// registry, not its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered sequence of [`Element`], insertion order significant.
///
/// The registry stores names without validation; all mutation policy lives
/// with the caller. Length N may be 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRegistry {
    elements: Vec<Element>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: names.into_iter().map(Element::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(Element::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.elements.push(Element::new(name));
    }

    /// Inserts at `index`, shifting later elements up. Panics when
    /// `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, name: impl Into<String>) {
        self.elements.insert(index, Element::new(name));
    }

    /// Removes the element at `index`, shifting later elements down.
    /// Returns the removed element, or None when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Element> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Renames the element at `index`. Returns false when out of range.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.elements.get_mut(index) {
            Some(element) => {
                element.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Swaps the positions of two elements.
    ///
    /// Matrix values are bound to indices, not identities: swapping two
    /// elements does NOT move their matrix rows/columns, so each element
    /// ends up facing the other's relationships. Panics when either index
    /// is out of range, like `Vec::swap`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut reg = ElementRegistry::new();
        reg.push("wood");
        reg.push("stone");
        reg.push("metal");

        assert_eq!(reg.len(), 3);
        assert_eq!(reg.name(0), Some("wood"));
        assert_eq!(reg.name(2), Some("metal"));
        assert_eq!(reg.name(3), None);
    }

    #[test]
    fn test_duplicate_and_empty_names_are_allowed() {
        let reg = ElementRegistry::from_names(["", "rock", "rock"]);
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.name(0), Some(""));
        assert_eq!(reg.name(1), reg.name(2));
    }

    #[test]
    fn test_remove_shifts_and_reports_out_of_range() {
        let mut reg = ElementRegistry::from_names(["a", "b", "c"]);

        let removed = reg.remove(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(reg.name(1), Some("c"));
        assert!(reg.remove(5).is_none());
    }

    #[test]
    fn test_rename_in_place() {
        let mut reg = ElementRegistry::from_names(["a"]);
        assert!(reg.rename(0, "alpha"));
        assert_eq!(reg.name(0), Some("alpha"));
        assert!(!reg.rename(1, "beta"));
    }

    #[test]
    fn test_swap_moves_names_only() {
        let mut reg = ElementRegistry::from_names(["a", "b"]);
        reg.swap(0, 1);
        assert_eq!(reg.name(0), Some("b"));
        assert_eq!(reg.name(1), Some("a"));
    }
}
