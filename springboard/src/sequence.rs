//! Sequence views with O(1) "rest"
//!
//! The recursive algorithms peel one element off their input per step. For
//! that to stay linear overall, taking the rest of a sequence has to be O(1):
//! [`NextList`] shares its tail, [`SliceView`] just moves an index.

use std::fmt;
use std::rc::Rc;

/// Anything a step can split into a first element and the rest
pub trait Sequence: Sized {
    type Item;

    fn is_empty(&self) -> bool;

    /// First element, `None` when empty
    fn first(&self) -> Option<&Self::Item>;

    /// Everything after the first element; the rest of an empty sequence is
    /// empty
    fn rest(&self) -> Self;

    /// Number of elements, found by walking `rest`
    fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut count = 1;
        let mut current = self.rest();
        while !current.is_empty() {
            count += 1;
            current = current.rest();
        }
        count
    }
}

struct Link<T> {
    item: T,
    next: Option<Rc<Link<T>>>,
}

/// A persistent singly linked list
///
/// `cons` and `rest` are O(1) and share structure with the original list, so
/// cloning a list or taking its rest never copies elements.
pub struct NextList<T> {
    head: Option<Rc<Link<T>>>,
}

impl<T> NextList<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// A new list with `item` in front of this one
    pub fn cons(&self, item: T) -> Self {
        Self {
            head: Some(Rc::new(Link {
                item,
                next: self.head.clone(),
            })),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> NextList<T> {
    /// The same elements in reverse order
    pub fn reversed(&self) -> Self {
        let mut reversed = NextList::new();
        for item in self.iter() {
            reversed = reversed.cons(item.clone());
        }
        reversed
    }
}

impl<T> Sequence for NextList<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|link| &link.item)
    }

    fn rest(&self) -> Self {
        Self {
            head: self.head.as_ref().and_then(|link| link.next.clone()),
        }
    }

    fn len(&self) -> usize {
        self.iter().count()
    }
}

impl<T> Default for NextList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NextList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Drop for NextList<T> {
    // Unlink iteratively; the default drop would recurse once per element.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut link) => next = link.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for NextList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = NextList::new();
        for item in items.into_iter().rev() {
            list = list.cons(item);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for NextList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for NextList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.next.as_deref();
            &link.item
        })
    }
}

/// An index into a slice, advanced by `rest`
#[derive(Debug)]
pub struct SliceView<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> SliceView<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, index: 0 }
    }

    /// Position of the first element within the underlying slice
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> &'a [T] {
        self.items.get(self.index..).unwrap_or(&[])
    }
}

impl<T> Clone for SliceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceView<'_, T> {}

impl<T> Sequence for SliceView<'_, T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.index >= self.items.len()
    }

    fn first(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    fn rest(&self) -> Self {
        Self {
            items: self.items,
            index: (self.index + 1).min(self.items.len()),
        }
    }

    fn len(&self) -> usize {
        self.items.len() - self.index
    }
}
