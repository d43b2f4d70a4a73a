//! Slow / fast pointer algorithms over the node chain of a [`SinglyLinkedList`].
//!
//! Two cursors walk the chain at different rates: when the fast one runs out of nodes the slow one
//! sits in the middle, and if the fast one ever lands on the slow one the chain has to loop back on
//! itself. Neither needs any memory besides the two cursors.

use std::marker::PhantomData;
use std::mem;

use super::{Length, Link, ListContents, NodePtr, SinglyLinkedList};
use super::ListState::{Empty, Full};
use crate::util::error::{IndexOutOfBounds, RangeError, check_inclusive_range};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

impl<T> SinglyLinkedList<T> {
    /// Returns a reference to the middle element of the list, or [`None`] if it is empty.
    ///
    /// For an even number of elements, this is the first of the two middle elements, so a list of
    /// `[1, 2, 3, 4]` returns `2` and `[1, 2, 3, 4, 5]` returns `3`.
    pub fn middle(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(middle_of(contents.head, |node| contents.after(node)).value()),
        }
    }

    /// Returns true if following the links from the head loops back on itself, using Floyd's cycle
    /// detection.
    ///
    /// Lists only contain a cycle after [`link_tail_to`](SinglyLinkedList::link_tail_to).
    pub fn has_cycle(&self) -> bool {
        let head = match &self.state {
            Empty => return false,
            Full(ListContents { head, .. }) => *head,
        };

        let mut slow = head;
        let mut fast = head;
        loop {
            fast = match fast.next().and_then(|next| *next.next()) {
                Some(node) => node,
                None => return false,
            };
            // SAFETY: Slow trails fast, so it only steps onto nodes fast has already passed.
            slow = unsafe { slow.next().unreachable() };
            if slow == fast { return true; }
        }
    }

    /// Links the tail back to the node at `index`, forming a cycle that
    /// [`has_cycle`](SinglyLinkedList::has_cycle) will detect.
    ///
    /// The list still knows where its tail is, so iteration, [`middle`](SinglyLinkedList::middle)
    /// and dropping stop at the tail as usual. Any method that removes or relinks nodes breaks the
    /// cycle again before it does so, as does [`unlink_tail`](SinglyLinkedList::unlink_tail).
    pub fn link_tail_to(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        let contents = self.checked_contents_for_index(index)?;
        *contents.tail.next_mut() = Some(contents.seek(index));
        Ok(())
    }

    /// Breaks any cycle created by [`link_tail_to`](SinglyLinkedList::link_tail_to).
    pub fn unlink_tail(&mut self) {
        if let Full(contents) = &mut self.state {
            contents.unlink_tail();
        }
    }

    /// Splits the list in two at its [`middle`](SinglyLinkedList::middle), returning a new list
    /// owning every node after it. `self` keeps the first `ceil(n / 2)` elements.
    pub fn split_half(&mut self) -> SinglyLinkedList<T> {
        let contents = match &mut self.state {
            Empty => return SinglyLinkedList::new(),
            Full(contents) => contents,
        };
        contents.unlink_tail();

        let middle = middle_of(contents.head, |node| *node.next());
        let Some(rest) = middle.next_mut().take() else {
            // A single node has nothing to split off.
            return SinglyLinkedList::new();
        };

        let len = contents.len.get();
        let kept = len.div_ceil(2);
        let other = SinglyLinkedList {
            state: Full(ListContents {
                // SAFETY: The middle node had a successor, so more than half of the nodes remain.
                len: unsafe { Length::new(len - kept).unreachable() },
                head: rest,
                tail: contents.tail,
            }),
            _phantom: PhantomData,
        };

        // SAFETY: kept is at least 1 for a non-empty list.
        contents.len = unsafe { Length::new(kept).unreachable() };
        contents.tail = middle;
        other
    }

    /// Reverses the order of the list in place.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            contents.unlink_tail();
            let mut prev: Link<T> = None;
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                curr = mem::replace(node.next_mut(), prev);
                prev = Some(node);
            }
            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Reverses the elements from index `start` to `end` (both inclusive) in place, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if `end` is out of bounds or `start` is greater than `end`.
    pub fn reverse_between(&mut self, start: usize, end: usize) {
        self.try_reverse_between(start, end).throw()
    }

    /// Reverses the elements from index `start` to `end` (both inclusive) in place, returning an
    /// [`Err`] on a failure rather than panicking.
    pub fn try_reverse_between(&mut self, start: usize, end: usize) -> Result<(), RangeError> {
        check_inclusive_range(start, end, self.len())?;
        let contents = match &mut self.state {
            Empty => return Ok(()),
            Full(contents) => contents,
        };
        if start == end { return Ok(()); }
        contents.unlink_tail();

        let before = start.checked_sub(1).map(|index| contents.seek(index));
        let first = match before {
            // SAFETY: start is in bounds, so the node before it has a successor.
            Some(node) => unsafe { node.next().unreachable() },
            None => contents.head,
        };

        let mut prev: Link<T> = None;
        let mut curr = Some(first);
        for _ in start..=end {
            // SAFETY: end is in bounds, so there are at least end - start + 1 nodes from first.
            let node = unsafe { curr.unreachable() };
            curr = mem::replace(node.next_mut(), prev);
            prev = Some(node);
        }

        // SAFETY: The loop above runs at least once.
        let last = unsafe { prev.unreachable() };
        *first.next_mut() = curr;
        match before {
            Some(node) => *node.next_mut() = Some(last),
            None => contents.head = last,
        }
        if curr.is_none() {
            contents.tail = first;
        }
        Ok(())
    }
}

impl<T: PartialOrd> SinglyLinkedList<T> {
    /// Sorts the list in ascending order by relinking its nodes, keeping equal elements in their
    /// original order.
    ///
    /// The chain is split at its middle with a slow / fast walk, each half is sorted recursively and
    /// the two are merged. Unlike sorting by index, no step of this needs random access.
    pub fn merge_sort(&mut self) {
        if let Full(contents) = &mut self.state {
            contents.unlink_tail();
            contents.head = sort_chain(contents.head);

            let mut tail = contents.head;
            while let Some(next) = tail.next() {
                tail = *next;
            }
            contents.tail = tail;
        }
    }
}

/// Returns the middle node of the chain starting at `head`, where `step` returns the node following
/// the one it is given. Even lengths return the first of the two middle nodes, which is never the
/// last node of a chain with two or more nodes.
pub(crate) fn middle_of<T>(head: NodePtr<T>, step: impl Fn(NodePtr<T>) -> Link<T>) -> NodePtr<T> {
    let mut slow = head;
    let mut fast = step(head);
    while let Some(ahead) = fast.and_then(&step) {
        // SAFETY: Slow trails fast, so it only steps onto nodes fast has already passed.
        slow = unsafe { step(slow).unreachable() };
        fast = step(ahead);
    }
    slow
}

/// Sorts the null terminated chain starting at `head`, returning the new head.
fn sort_chain<T: PartialOrd>(head: NodePtr<T>) -> NodePtr<T> {
    if head.next().is_none() { return head; }

    let middle = middle_of(head, |node| *node.next());
    // SAFETY: The middle of a chain with two or more nodes always has a successor.
    let rest = unsafe { middle.next_mut().take().unreachable() };
    merge_chains(sort_chain(head), sort_chain(rest))
}

/// Merges two sorted, null terminated chains, taking from `right` only when its head is strictly
/// less than the head of `left`.
fn merge_chains<T: PartialOrd>(left: NodePtr<T>, right: NodePtr<T>) -> NodePtr<T> {
    let mut left = Some(left);
    let mut right = Some(right);
    let mut head: Link<T> = None;
    let mut tail: Link<T> = None;

    loop {
        let node = match (left, right) {
            (Some(l), Some(r)) if l.value() > r.value() => {
                right = *r.next();
                r
            },
            (Some(l), Some(_)) => {
                left = *l.next();
                l
            },
            // The remaining chain is already sorted and terminated, so it is attached as is.
            (Some(rest), None) | (None, Some(rest)) => {
                append(&mut head, &mut tail, rest);
                break;
            },
            (None, None) => break,
        };
        append(&mut head, &mut tail, node);
    }

    // SAFETY: Both chains have at least one node, so at least one node is appended.
    unsafe { head.unreachable() }
}

fn append<T>(head: &mut Link<T>, tail: &mut Link<T>, node: NodePtr<T>) {
    match *tail {
        Some(last) => *last.next_mut() = Some(node),
        None => *head = Some(node),
    }
    *tail = Some(node);
}
