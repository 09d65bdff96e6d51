mod creation;
pub(crate) mod ops;
pub mod utils;
mod vec;

use std::sync::{Arc, RwLock};
use stridex_broadcast::Operand;
use stridex_core::{
    buffer::Buffer,
    dtype::DType,
    error::{Error, Result},
    layout::Layout,
    scalar::Scalar,
};

/// A strided view onto shared storage.
///
/// Cloning an `Array` shares the storage; views produced by `transpose`,
/// `narrow`, `flip` and `reshape` share it as well but carry their own
/// layout.
#[derive(Clone)]
pub struct Array {
    storage: Arc<RwLock<dyn Buffer>>,
    layout: Layout,
}

impl Array {
    // storage

    pub fn dtype(&self) -> DType {
        self.storage.read().map(|b| b.dtype()).unwrap_or_else(|e| e.into_inner().dtype())
    }

    pub fn storage_len(&self) -> usize {
        self.storage.read().map(|b| b.len()).unwrap_or_else(|e| e.into_inner().len())
    }

    /// True when both arrays are backed by the same storage object.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Reads the slot at `index` without converting it.
    pub fn get_slot(&self, index: usize) -> Result<Scalar> {
        let buffer = self.storage.read().map_err(|_| Error::BufferLocked)?;
        buffer.get(index)
    }

    pub fn set_slot(&self, index: usize, value: Scalar) -> Result<()> {
        let mut buffer = self.storage.write().map_err(|_| Error::BufferLocked)?;
        buffer.set(index, value)
    }

    // layout

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    pub fn offset(&self) -> usize {
        self.layout.offset()
    }

    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    // element access

    /// Value of the item at `pos`; composite items yield their first slot.
    pub fn get(&self, pos: &[usize]) -> Result<f64> {
        self.value_at(self.layout.slot_of(pos)?)
    }

    pub fn set(&self, pos: &[usize], value: f64) -> Result<()> {
        self.set_value_at(self.layout.slot_of(pos)?, value)
    }

    // views

    fn with_layout(&self, layout: Layout) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            layout,
        }
    }

    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let mut layout = self.layout.clone();
        layout.view(shape)?;
        Ok(self.with_layout(layout))
    }

    pub fn transpose(&self, dim0: usize, dim1: usize) -> Result<Self> {
        let mut layout = self.layout.clone();
        layout.transpose(dim0, dim1)?;
        Ok(self.with_layout(layout))
    }

    pub fn narrow(&self, dim: usize, start: usize, length: usize) -> Result<Self> {
        let mut layout = self.layout.clone();
        layout.narrow(dim, start, length)?;
        Ok(self.with_layout(layout))
    }

    pub fn flip(&self, dim: usize) -> Result<Self> {
        let mut layout = self.layout.clone();
        layout.flip(dim)?;
        Ok(self.with_layout(layout))
    }
}

impl Operand for Array {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn value_at(&self, index: usize) -> Result<f64> {
        let buffer = self.storage.read().map_err(|_| Error::BufferLocked)?;
        buffer.value_at(index)
    }

    fn set_value_at(&self, index: usize, value: f64) -> Result<()> {
        let mut buffer = self.storage.write().map_err(|_| Error::BufferLocked)?;
        buffer.set_value_at(index, value)
    }

    fn is_same(&self, other: &Self) -> bool {
        self.shares_storage(other) && self.layout == other.layout
    }
}

impl std::fmt::Debug for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Array")
            .field("dtype", &self.dtype())
            .field("layout", &self.layout)
            .finish()
    }
}
