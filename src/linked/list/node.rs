use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc, because moving out of a Box moves the
// value off the heap and frees the allocation in one step.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr is only ever created from a live allocation, which stays alive until
        // the owning list takes or drops the node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, the list hands out at most one reference per node at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn from_value(value: T) -> NodePtr<T> {
        NodePtr::from_node(Node { value, next: None })
    }

    /// Moves the node back into a Box, freeing the allocation once the returned node is dropped.
    ///
    /// # Safety
    /// The node must not be accessed through any other NodePtr afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and the caller guarantees it is the last use.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
