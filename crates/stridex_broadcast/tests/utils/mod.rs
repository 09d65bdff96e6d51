#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use stridex_broadcast::Operand;
use stridex_core::{
    error::{Error, Result},
    layout::Layout,
};

/// In-memory operand that counts storage reads.
#[derive(Clone)]
pub struct Recorded {
    storage: Rc<RefCell<Vec<f64>>>,
    layout: Layout,
    reads: Rc<Cell<usize>>,
}

impl Recorded {
    pub fn new(values: Vec<f64>, shape: &[usize]) -> Self {
        assert_eq!(values.len(), shape.iter().product::<usize>());
        Self {
            storage: Rc::new(RefCell::new(values)),
            layout: Layout::from_shape(shape, 1),
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::new(vec![0.0; shape.iter().product()], shape)
    }

    /// Another view onto the same storage.
    pub fn with_layout(&self, layout: Layout) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            layout,
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn values(&self) -> Vec<f64> {
        self.storage.borrow().clone()
    }
}

impl Operand for Recorded {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn value_at(&self, index: usize) -> Result<f64> {
        self.reads.set(self.reads.get() + 1);
        let storage = self.storage.borrow();
        storage.get(index).copied().ok_or(Error::IndexOutOfBounds {
            index,
            size: storage.len(),
        })
    }

    fn set_value_at(&self, index: usize, value: f64) -> Result<()> {
        let mut storage = self.storage.borrow_mut();
        let size = storage.len();
        let slot = storage.get_mut(index).ok_or(Error::IndexOutOfBounds { index, size })?;
        *slot = value;
        Ok(())
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage) && self.layout == other.layout
    }
}

/// Slot index of `pos` computed directly from a layout broadcast to `shape`.
pub fn naive_index(layout: &Layout, shape: &[usize], pos: &[usize]) -> usize {
    let pad = shape.len() - layout.ndim();
    let mut index = layout.offset() as isize;
    for d in 0..layout.ndim() {
        if layout.shape()[d] != 1 {
            index += pos[d + pad] as isize * layout.strides()[d];
        }
    }
    index as usize
}
