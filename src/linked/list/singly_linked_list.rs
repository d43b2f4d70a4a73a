use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, IterMut, Length, Link, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, RangeError, ReversedRange};
use crate::util::option::OptionExtension;

/// A list with links in a single direction, keeping track of both ends.
///
/// Alongside the usual container methods, the list exposes the classic slow / fast pointer
/// algorithms: [`middle`](SinglyLinkedList::middle), [`has_cycle`](SinglyLinkedList::has_cycle),
/// [`split_half`](SinglyLinkedList::split_half) and [`merge_sort`](SinglyLinkedList::merge_sort).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `link_tail_to` | `O(i)` |
/// | `middle` | `O(n)` |
/// | `has_cycle` | `O(n)` |
/// | `split_half` | `O(n)` |
/// | `merge_sort` | `O(n log n)` |
/// | `reverse` | `O(n)` |
///
/// Without back links, `pop_back` has to walk the whole list to find the node before the tail.
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

pub(crate) use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    #[doc(alias = "unshift")]
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the SinglyLinkedList.
    #[doc(alias = "push")]
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    #[doc(alias = "shift")]
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                contents.unlink_tail();
                // SAFETY: The head is unlinked from the list below, nothing else points to it.
                let node = unsafe { contents.head.take_node() };

                match contents.len.decrement() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the head is followed by at
                        // least one more node.
                        contents.head = unsafe { node.next.unreachable() };
                        contents.len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// This needs to walk the whole list to find the new tail.
    #[doc(alias = "pop")]
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                contents.unlink_tail();

                match contents.len.decrement() {
                    Some(new_len) => {
                        let new_tail = contents.seek(new_len.get() - 1);
                        // SAFETY: The tail is unlinked from the list below, nothing else points to
                        // it.
                        let node = unsafe { contents.tail.take_node() };
                        *new_tail.next_mut() = None;
                        contents.tail = new_tail;
                        contents.len = new_len;
                        Some(node.value)
                    },
                    None => {
                        // SAFETY: The only node is owned by the list, which is being emptied.
                        let node = unsafe { contents.head.take_node() };
                        self.state = Empty;
                        Some(node.value)
                    },
                }
            },
        }
    }

    /// Returns a [`Vec`] containing clones of every element, from front to back. This is also how
    /// the list serializes with the `serde` feature enabled.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_value(value);

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    /// Returns the node following `node`, treating the tail as the end of the list even if it has
    /// been linked back into the list to form a cycle.
    pub fn after(&self, node: NodePtr<T>) -> Link<T> {
        if node == self.tail {
            None
        } else {
            *node.next()
        }
    }

    /// Returns the node at `index`, which must be less than the length.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index is less than the length, so every node before it has a successor.
            node = unsafe { self.after(node).unreachable() };
        }
        node
    }

    /// Restores the null termination of the tail, removing any cycle created by
    /// [`SinglyLinkedList::link_tail_to`].
    pub fn unlink_tail(&mut self) {
        *self.tail.next_mut() = None;
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.increment();
        let node = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.increment();
        let node = NodePtr::from_value(value);
        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(contents) = mem::replace(&mut self.state, Empty) {
            let mut curr = Some(contents.head);
            while let Some(ptr) = curr {
                curr = contents.after(ptr);
                // SAFETY: Each node between the head and tail is visited exactly once, even if the
                // tail links back into the list.
                drop(unsafe { ptr.take_node() });
            }
        }
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a SinglyLinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("SinglyLinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| i.to_string())
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SinglyLinkedList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
