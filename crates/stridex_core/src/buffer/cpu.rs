use crate::{
    buffer::Buffer,
    dtype::DType,
    error::{Error, Result},
    scalar::Scalar,
};

pub struct CpuBuffer {
    data: Vec<u8>,
    dtype: DType,
}

impl CpuBuffer {
    /// Zero-filled buffer of `size` slots.
    pub fn new(size: usize, dtype: DType) -> Result<Self> {
        let total_size = size
            .checked_mul(dtype.size_in_bytes())
            .ok_or_else(|| Error::InvalidArgument("Overflow in allocation".into()))?;
        Ok(Self {
            data: vec![0; total_size],
            dtype,
        })
    }

    pub fn from_values(values: &[f64], dtype: DType) -> Result<Self> {
        let mut buffer = Self::new(values.len(), dtype)?;
        for (i, &v) in values.iter().enumerate() {
            buffer.set_value_at(i, v)?;
        }
        Ok(buffer)
    }

    fn byte_range(&self, index: usize) -> std::ops::Range<usize> {
        let width = self.dtype.size_in_bytes();
        index * width..(index + 1) * width
    }
}

impl Buffer for CpuBuffer {
    fn len(&self) -> usize {
        self.data.len() / self.dtype.size_in_bytes()
    }

    fn dtype(&self) -> DType {
        self.dtype
    }

    fn get(&self, index: usize) -> Result<Scalar> {
        self.check_index(index)?;
        Ok(Scalar::from_le_bytes(self.dtype, &self.data[self.byte_range(index)]))
    }

    fn set(&mut self, index: usize, value: Scalar) -> Result<()> {
        self.check_index(index)?;
        if value.dtype() != self.dtype.slot() {
            return Err(Error::DTypeMismatch {
                expected: self.dtype.slot(),
                got: value.dtype(),
            });
        }
        let range = self.byte_range(index);
        value.write_le_bytes(&mut self.data[range]);
        Ok(())
    }
}
