//! Singly linked ordered list anchored by a sentinel head node.

use std::fmt;
use thiserror::Error;

type Link<T> = Option<Box<Node<T>>>;

/// One link in the chain. Only the sentinel carries `value: None`.
#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    next: Link<T>,
}

/// Errors reported by positional access on an [`OrderedList`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {position} is out of range for a list of length {len}")]
    OutOfRange { position: isize, len: usize },
}

/// Index-addressable sequence built on a chain of boxed nodes.
///
/// The chain always starts with a sentinel node that holds no element, so inserting in
/// front of the first element is handled like any other insertion. Positions are signed:
/// `-1` is meaningful to [`insert_after`](Self::insert_after) and the clamping rules of
/// [`remove_at`](Self::remove_at) accept any value.
///
/// Every positional operation walks the chain and is O(n); [`len`](Self::len) is O(1).
///
/// # Examples
///
/// ```
/// use polydraw::collections::OrderedList;
///
/// let mut list = OrderedList::new();
/// list.append(1);
/// list.append(3);
/// list.insert_after(2, 0);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
pub struct OrderedList<T> {
    count: usize,
    head: Node<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Creates an empty list (sentinel only).
    pub fn new() -> Self {
        Self {
            count: 0,
            head: Node {
                value: None,
                next: None,
            },
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when only the sentinel remains.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Links `value` after the current tail. Always succeeds.
    pub fn append(&mut self, value: T) -> bool {
        let mut link = &mut self.head.next;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            value: Some(value),
            next: None,
        }));
        self.count += 1;
        true
    }

    /// Inserts `value` immediately after the element at `position`.
    ///
    /// - `position < -1` is rejected: returns `false` and leaves the list untouched
    /// - `position == -1`, or an empty list, inserts at the front
    /// - `position >= len() - 1` appends at the end
    pub fn insert_after(&mut self, value: T, position: isize) -> bool {
        if position < -1 {
            return false;
        }

        let slot = if position == -1 || self.is_empty() {
            0
        } else if position as usize >= self.count - 1 {
            self.count
        } else {
            position as usize + 1
        };

        let link = self.link_mut(slot);
        let rest = link.take();
        *link = Some(Box::new(Node {
            value: Some(value),
            next: rest,
        }));
        self.count += 1;
        true
    }

    /// Unlinks one element and returns it.
    ///
    /// - empty list: `None`, no mutation
    /// - `position <= 0`: removes the first element
    /// - `position > len()`: removes the last element
    /// - otherwise: removes the element at index `position - 1`
    ///
    /// The general branch is one-based; `remove_at(len())` therefore removes the last
    /// element and `remove_at(1)` the first.
    pub fn remove_at(&mut self, position: isize) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let slot = if position <= 0 {
            0
        } else if position as usize > self.count {
            self.count - 1
        } else {
            position as usize - 1
        };

        let link = self.link_mut(slot);
        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;
        self.count -= 1;
        value
    }

    /// Borrows the element at `position`.
    ///
    /// # Errors
    /// Returns [`ListError::OutOfRange`] unless `0 <= position < len()`.
    pub fn get(&self, position: isize) -> Result<&T, ListError> {
        let index = self.check_index(position)?;
        self.iter().nth(index).ok_or(ListError::OutOfRange {
            position,
            len: self.count,
        })
    }

    /// Mutably borrows the element at `position`.
    ///
    /// # Errors
    /// Returns [`ListError::OutOfRange`] unless `0 <= position < len()`.
    pub fn get_mut(&mut self, position: isize) -> Result<&mut T, ListError> {
        let index = self.check_index(position)?;
        let len = self.count;
        self.iter_mut()
            .nth(index)
            .ok_or(ListError::OutOfRange { position, len })
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.next.as_deref(),
        }
    }

    /// Front-to-back iterator over mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.next.as_deref_mut(),
        }
    }

    fn check_index(&self, position: isize) -> Result<usize, ListError> {
        if position < 0 || position as usize >= self.count {
            Err(ListError::OutOfRange {
                position,
                len: self.count,
            })
        } else {
            Ok(position as usize)
        }
    }

    /// Link that currently holds the element at index `slot` (or the tail link when
    /// `slot == len()`).
    fn link_mut(&mut self, slot: usize) -> &mut Link<T> {
        let mut link = &mut self.head.next;
        for _ in 0..slot {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}

impl<T> Drop for OrderedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box::drop.
        let mut link = self.head.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    /// Renders the live elements as `[e0, e1, ...]`, starting after the sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Keep a cursor on the tail instead of re-walking the chain for every element.
        let mut link = &mut self.head.next;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let node = link.insert(Box::new(Node {
                value: Some(value),
                next: None,
            }));
            link = &mut node.next;
            self.count += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OrderedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Borrowing iterator returned by [`OrderedList::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        node.value.as_ref()
    }
}

/// Mutable iterator returned by [`OrderedList::iter_mut`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        node.value.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> OrderedList<i32> {
        values.iter().copied().collect()
    }

    fn contents(list: &OrderedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: OrderedList<i32> = OrderedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn append_preserves_order_and_count() {
        let mut list = OrderedList::new();
        for value in 0..25 {
            assert!(list.append(value * 10));
        }

        assert_eq!(list.len(), 25);
        for index in 0..25 {
            assert_eq!(*list.get(index).unwrap(), index as i32 * 10);
        }
    }

    #[test]
    fn insert_after_minus_one_puts_value_in_front() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.insert_after(0, -1));
        assert_eq!(*list.get(0).unwrap(), 0);
        assert_eq!(contents(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn insert_after_links_behind_position() {
        let mut list = list_of(&[10, 20, 30]);
        assert!(list.insert_after(15, 0));
        assert!(list.insert_after(25, 2));
        assert_eq!(contents(&list), vec![10, 15, 20, 25, 30]);
    }

    #[test]
    fn insert_after_clamps_past_end_to_append() {
        let mut list = list_of(&[1, 2]);
        assert!(list.insert_after(3, 1));
        assert!(list.insert_after(4, 99));
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn insert_after_into_empty_list_ignores_position() {
        let mut list = OrderedList::new();
        assert!(list.insert_after(7, 12));
        assert_eq!(contents(&list), vec![7]);
    }

    #[test]
    fn insert_after_rejects_positions_below_minus_one() {
        let mut list = list_of(&[1, 2]);
        assert!(!list.insert_after(9, -2));
        assert!(!list.insert_after(9, isize::MIN));
        assert_eq!(contents(&list), vec![1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_at_zero_shifts_front() {
        let mut list = list_of(&[4, 5, 6]);
        assert_eq!(list.remove_at(0), Some(4));
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(0).unwrap(), 5);
    }

    #[test]
    fn remove_at_negative_removes_first() {
        let mut list = list_of(&[4, 5, 6]);
        assert_eq!(list.remove_at(-8), Some(4));
        assert_eq!(contents(&list), vec![5, 6]);
    }

    #[test]
    fn remove_at_len_removes_last() {
        let mut list = list_of(&[4, 5, 6]);
        assert_eq!(list.remove_at(3), Some(6));
        assert_eq!(contents(&list), vec![4, 5]);
    }

    #[test]
    fn remove_at_past_len_removes_last() {
        let mut list = list_of(&[4, 5, 6]);
        assert_eq!(list.remove_at(40), Some(6));
        assert_eq!(contents(&list), vec![4, 5]);
    }

    #[test]
    fn remove_at_general_branch_is_one_based() {
        let mut list = list_of(&[4, 5, 6, 7]);
        assert_eq!(list.remove_at(2), Some(5));
        assert_eq!(contents(&list), vec![4, 6, 7]);
        assert_eq!(list.remove_at(1), Some(4));
        assert_eq!(contents(&list), vec![6, 7]);
    }

    #[test]
    fn remove_at_on_empty_list_is_noop() {
        let mut list: OrderedList<i32> = OrderedList::new();
        assert_eq!(list.remove_at(0), None);
        assert_eq!(list.remove_at(5), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn get_out_of_range_errors_for_every_state() {
        let mut list = OrderedList::new();
        for step in 0..4 {
            let len = list.len() as isize;
            for position in [-3, -1, len, len + 1, len + 10] {
                assert_eq!(
                    list.get(position),
                    Err(ListError::OutOfRange {
                        position,
                        len: list.len()
                    })
                );
            }
            list.append(step);
        }
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = list_of(&[1, 2, 3]);
        *list.get_mut(1).unwrap() = 20;
        assert_eq!(contents(&list), vec![1, 20, 3]);
        assert!(list.get_mut(3).is_err());
    }

    #[test]
    fn iteration_restarts_from_front() {
        let list = list_of(&[1, 2, 3]);
        let mut first = list.iter();
        assert_eq!(first.next(), Some(&1));
        assert_eq!(first.next(), Some(&2));

        let second: Vec<_> = list.iter().collect();
        assert_eq!(second, vec![&1, &2, &3]);
    }

    #[test]
    fn iter_mut_visits_every_element() {
        let mut list = list_of(&[1, 2, 3]);
        for value in &mut list {
            *value *= 2;
        }
        assert_eq!(contents(&list), vec![2, 4, 6]);
    }

    #[test]
    fn display_skips_sentinel() {
        let list = list_of(&[3, 1, 4]);
        assert_eq!(list.to_string(), "[3, 1, 4]");
        assert_eq!(format!("{list:?}"), "[3, 1, 4]");
    }

    #[test]
    fn extend_appends_after_existing_tail() {
        let mut list = list_of(&[1]);
        list.extend([2, 3]);
        list.append(4);
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn clone_is_independent() {
        let original = list_of(&[1, 2]);
        let mut copy = original.clone();
        copy.append(3);
        assert_eq!(original.len(), 2);
        assert_eq!(copy, list_of(&[1, 2, 3]));
    }

    #[test]
    fn dropping_long_list_does_not_overflow() {
        let list: OrderedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
