//! Ordered list with a single selected element.

use std::cmp::Ordering;

use crate::observer::{Observers, SubscriptionId};

/// What changed on a [`SelectionList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// The selected element changed (including to or from none).
    SelectedItem,
    /// The order of the items changed; positions must be re-read.
    Reset,
}

/// A list of items plus a "current" pointer that is independent of the
/// order of the items.
///
/// Selection is by identity: the pointer follows its element across a
/// re-sort, and two equal items at different positions are distinct.
#[derive(Debug)]
pub struct SelectionList<T> {
    items: Vec<T>,
    selected: Option<usize>,
    observers: Observers<ListChange>,
}

impl<T> SelectionList<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            selected: None,
            observers: Observers::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Index of the first item matching `pred`.
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Point the selection at `index`, or clear it with `None`.
    ///
    /// Returns `true` and emits [`ListChange::SelectedItem`] only when the
    /// pointer actually moves. Out-of-range indices are ignored.
    pub fn set_selected(&mut self, index: Option<usize>) -> bool {
        if let Some(i) = index {
            if i >= self.items.len() {
                log::warn!(
                    "Selection index {} out of range for list of {}",
                    i,
                    self.items.len()
                );
                return false;
            }
        }
        if self.selected == index {
            return false;
        }
        self.selected = index;
        self.observers.notify(&ListChange::SelectedItem);
        true
    }

    /// Re-order the items. The selected element stays selected.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&T, &T) -> Ordering) {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| compare(&self.items[a], &self.items[b]));

        let mut slots: Vec<Option<T>> = self.items.drain(..).map(Some).collect();
        self.items = order.iter().filter_map(|&i| slots[i].take()).collect();
        self.selected = self
            .selected
            .and_then(|old| order.iter().position(|&i| i == old));

        self.observers.notify(&ListChange::Reset);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ListChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl<'a, T> IntoIterator for &'a SelectionList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
