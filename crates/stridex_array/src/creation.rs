use crate::Array;
use std::sync::{Arc, RwLock};
use stridex_core::{
    buffer::{cpu::CpuBuffer, Buffer},
    dtype::{get_default_dtype, DType},
    error::{Error, Result},
    layout::Layout,
};

impl Array {
    /// Contiguous array of the default dtype.
    pub fn new(values: &[f64], shape: &[usize]) -> Result<Self> {
        Self::new_with_spec(values, shape, get_default_dtype())
    }

    /// Contiguous array from slot values; composite dtypes take
    /// `elements_per_item` values per item.
    pub fn new_with_spec(values: &[f64], shape: &[usize], dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape, dtype.elements_per_item());
        let expected = layout.size() * dtype.elements_per_item();
        if values.len() != expected {
            return Err(Error::InvalidShape {
                message: format!(
                    "{} values cannot fill shape {:?} of {} ({} slots needed)",
                    values.len(),
                    shape,
                    dtype.as_str(),
                    expected
                ),
            });
        }

        Self::from_buffer(CpuBuffer::from_values(values, dtype)?, layout)
    }

    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::zeros_with_dtype(shape, get_default_dtype())
    }

    pub fn zeros_with_dtype(shape: &[usize], dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape, dtype.elements_per_item());
        let buffer = CpuBuffer::new(layout.size() * dtype.elements_per_item(), dtype)?;
        Self::from_buffer(buffer, layout)
    }

    /// Rank-0 array holding `value`.
    pub fn scalar(value: f64) -> Result<Self> {
        Self::new(&[value], &[])
    }

    /// Wraps existing storage; `layout` must stay inside it and match the
    /// dtype's item granularity.
    pub fn from_buffer<B: Buffer + 'static>(buffer: B, layout: Layout) -> Result<Self> {
        let items = buffer.dtype().elements_per_item();
        if layout.elements_per_item() != items {
            return Err(Error::InvalidArgument(format!(
                "layout uses {} slots per item but {} needs {}",
                layout.elements_per_item(),
                buffer.dtype().as_str(),
                items
            )));
        }
        if layout.size() > 0 && layout.required_len() > buffer.len() {
            return Err(Error::IndexOutOfBounds {
                index: layout.required_len() - 1,
                size: buffer.len(),
            });
        }

        let storage: Arc<RwLock<dyn Buffer>> = Arc::new(RwLock::new(buffer));
        Ok(Self { storage, layout })
    }
}
