use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped. Cloning shares the counter, so a single
/// counter can track every copy pushed into a collection.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

#[allow(unused)]
impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops seen by this counter so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
