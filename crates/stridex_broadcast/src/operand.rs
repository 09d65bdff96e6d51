use stridex_core::{error::Result, layout::Layout};

/// A logical array the broadcast iterator can walk.
///
/// Reads and writes address storage slots directly; the iterator supplies
/// slot indices already resolved through the operand's layout.
pub trait Operand {
    fn layout(&self) -> &Layout;

    fn value_at(&self, index: usize) -> Result<f64>;

    fn set_value_at(&self, index: usize, value: f64) -> Result<()>;

    /// True when `other` is the very same array: same storage object and
    /// same view onto it.
    fn is_same(&self, other: &Self) -> bool;
}
