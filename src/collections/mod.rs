//! Container types shared by the editing tools.
//!
//! - [`OrderedList`]: singly linked, index-addressable sequence used to hold shape vertices

pub mod ordered;

pub use ordered::{Iter, IterMut, ListError, OrderedList};
