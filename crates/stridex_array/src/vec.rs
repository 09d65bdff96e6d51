use crate::Array;
use stridex_broadcast::{BroadcastIndexIterator, IndexIterator, Operand, OutputSpec};
use stridex_core::{error::Result, layout::Layout};

impl Array {
    /// Item values in row-major order; composite items yield their first slot.
    pub fn to_flatten_vec(&self) -> Result<Vec<f64>> {
        let mut result = Vec::with_capacity(self.size());
        let mut iter = self.item_indices()?;
        while iter.advance() {
            result.push(self.value_at(iter.a_index())?);
        }
        Ok(result)
    }

    /// Every storage slot of every item in row-major order.
    pub fn to_flatten_slots(&self) -> Result<Vec<f64>> {
        let items = self.layout().elements_per_item();
        let mut result = Vec::with_capacity(self.size() * items);
        let mut iter = self.item_indices()?;
        while iter.advance() {
            for k in 0..items {
                result.push(self.value_at(iter.a_index() + k)?);
            }
        }
        Ok(result)
    }

    // this array against a scalar walks exactly its own items
    fn item_indices(&self) -> Result<BroadcastIndexIterator> {
        BroadcastIndexIterator::new(self.layout(), &Layout::from_shape(&[], 1), OutputSpec::None)
    }
}
