use crate::Array;
use stridex_broadcast::{broadcast_shape, calc_broadcast_shapes, BroadcastIndexIterator, IndexIterator, OutputSpec, StridePlan};
use stridex_core::{
    error::{Error, Result},
    layout::Layout,
};

impl Array {
    /// Materialises this array repeated to `shape`.
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let incompatible = || Error::InvalidShape {
            message: format!("Cannot broadcast shape {:?} to {:?}", self.shape(), shape),
        };

        let (_, target) = calc_broadcast_shapes(self.shape(), self.size(), shape).ok_or_else(incompatible)?;
        // the target must already be the broadcast of both shapes
        if !target.is_empty() && broadcast_shape(&[self.shape(), &target]).ok().as_deref() != Some(target.as_slice()) {
            return Err(incompatible());
        }

        tracing::debug!(from = ?self.shape(), to = ?target, "materialising broadcast");

        let result = Self::zeros_with_dtype(&target, self.dtype())?;
        let items = self.layout().elements_per_item();

        if target.is_empty() {
            for k in 0..items {
                result.set_slot(k, self.get_slot(self.offset() + k)?)?;
            }
            return Ok(result);
        }

        let mut iter = BroadcastIndexIterator::new(self.layout(), result.layout(), OutputSpec::None)?;
        while iter.advance() {
            for k in 0..items {
                result.set_slot(iter.b_index() + k, self.get_slot(iter.a_index() + k)?)?;
            }
        }

        Ok(result)
    }

    pub fn broadcast_like(&self, other: &Self) -> Result<Self> {
        self.broadcast_to(other.shape())
    }

    pub fn broadcast_left(&self, batch_dims: &[usize]) -> Result<Self> {
        let mut new_shape = batch_dims.to_vec();
        new_shape.extend(self.shape());
        self.broadcast_to(&new_shape)
    }

    /// Zero-copy view of this array repeated to `shape`: broadcast axes get
    /// stride 0 and share the underlying items.
    pub fn broadcast_view(&self, shape: &[usize]) -> Result<Self> {
        let plan = StridePlan::new(self.layout(), shape)?;
        let layout = Layout::new(shape, plan.strides(), self.offset(), self.layout().elements_per_item())?;
        Ok(self.with_layout(layout))
    }
}
