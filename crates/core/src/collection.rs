use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An order-preserving list whose mutators hand back a new list instead
/// of editing in place, so derived state never observes a half-applied
/// change. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedList<T>(Vec<T>);

impl<T: Clone> OrderedList<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn append(&self, value: T) -> Self {
        let mut items = self.0.clone();
        items.push(value);
        Self(items)
    }

    pub fn replace_at(&self, index: usize, value: T) -> Result<Self, Error> {
        self.check_index(index)?;
        let mut items = self.0.clone();
        items[index] = value;
        Ok(Self(items))
    }

    pub fn remove_at(&self, index: usize) -> Result<Self, Error> {
        self.check_index(index)?;
        let mut items = self.0.clone();
        items.remove(index);
        Ok(Self(items))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.0.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(())
    }
}

impl<T: Clone> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

/// A fixed, non-empty set of candidates with one active value. `advance`
/// wraps from the last candidate back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicSelector<T> {
    candidates: Vec<T>,
    active: usize,
}

impl<T: Clone + PartialEq> CyclicSelector<T> {
    pub fn new(candidates: Vec<T>) -> Result<Self, Error> {
        if candidates.is_empty() {
            return Err(Error::IndexOutOfRange { index: 0, len: 0 });
        }
        Ok(Self {
            candidates,
            active: 0,
        })
    }

    /// Build a selector with `active` as the current value; an `active`
    /// not in the candidate set falls back to the first candidate.
    pub fn starting_at(candidates: Vec<T>, active: &T) -> Result<Self, Error> {
        let mut selector = Self::new(candidates)?;
        selector.active = selector
            .candidates
            .iter()
            .position(|c| c == active)
            .unwrap_or(0);
        Ok(selector)
    }

    pub fn active(&self) -> &T {
        &self.candidates[self.active]
    }

    pub fn advance(&self) -> Self {
        Self {
            candidates: self.candidates.clone(),
            active: (self.active + 1) % self.candidates.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_then_remove_last_restores_the_sequence() {
        let list: OrderedList<i32> = vec![1, 2, 3].into();
        let grown = list.append(4);
        assert_eq!(grown.len(), 4);
        let shrunk = grown.remove_at(grown.len() - 1).unwrap();
        assert_eq!(shrunk, list);
    }

    #[test]
    fn replace_keeps_order_around_the_edited_slot() {
        let list: OrderedList<&str> = vec!["a", "b", "c"].into();
        let edited = list.replace_at(1, "B").unwrap();
        assert_eq!(edited.iter().copied().collect::<Vec<_>>(), vec!["a", "B", "c"]);
        // the original is untouched
        assert_eq!(list.get(1), Some(&"b"));
    }

    #[test]
    fn stale_indices_are_rejected() {
        let list: OrderedList<i32> = vec![1, 2].into();
        assert_eq!(
            list.replace_at(2, 9).unwrap_err(),
            Error::IndexOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(
            list.remove_at(5).unwrap_err(),
            Error::IndexOutOfRange { index: 5, len: 2 }
        );
    }

    #[test]
    fn selector_wraps_after_a_full_cycle() {
        let selector = CyclicSelector::new(vec!["a", "b", "c"]).unwrap();
        let mut current = selector.clone();
        for _ in 0..selector.len() {
            current = current.advance();
        }
        assert_eq!(current.active(), selector.active());
    }

    #[test]
    fn selector_starts_at_restored_value() {
        let selector = CyclicSelector::starting_at(vec![10, 20, 30], &20).unwrap();
        assert_eq!(*selector.active(), 20);
        assert_eq!(*selector.advance().active(), 30);
        assert_eq!(*selector.advance().advance().active(), 10);
    }

    #[test]
    fn unknown_restored_value_defaults_to_first() {
        let selector = CyclicSelector::starting_at(vec![10, 20], &99).unwrap();
        assert_eq!(*selector.active(), 10);
    }

    #[test]
    fn empty_candidate_set_is_a_programming_error() {
        let err = CyclicSelector::<i32>::new(vec![]).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 0, len: 0 });
    }
}
