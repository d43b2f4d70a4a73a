//! Linked collection types. Revolves around [`SinglyLinkedList`] and the slow / fast pointer
//! algorithms it exposes.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
