pub mod cpu;

use crate::{
    dtype::DType,
    error::{Error, Result},
    scalar::Scalar,
};

/// Backing storage of an array, addressed by slot index.
///
/// A slot is one scalar of [`DType::slot`]; composite items occupy
/// `dtype().elements_per_item()` consecutive slots.
pub trait Buffer: Send + Sync {
    /// Number of slots.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn dtype(&self) -> DType;

    fn get(&self, index: usize) -> Result<Scalar>;
    fn set(&mut self, index: usize, value: Scalar) -> Result<()>;

    fn value_at(&self, index: usize) -> Result<f64> {
        Ok(self.get(index)?.as_f64_any())
    }

    fn set_value_at(&mut self, index: usize, value: f64) -> Result<()> {
        self.set(index, Scalar::from_f64(self.dtype(), value))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds { index, size: self.len() });
        }
        Ok(())
    }
}
