//! Broadcasting iteration engine.
//!
//! [`shape`] derives the common shape of several operands, [`plan`] turns
//! each operand's layout into zero-padded strides and wrap deltas against
//! that shape, and [`iterator`] walks all operands in lock-step without
//! materialising any expanded copy. [`values`] layers cached value reads on
//! top of the pure index traversal.

pub mod alias;
pub mod iterator;
pub mod operand;
pub mod plan;
pub mod shape;
pub mod values;

pub use alias::{resolve_output, OutputSpec};
pub use iterator::{BroadcastIndexIterator, IndexIterator, Phase, Step};
pub use operand::Operand;
pub use plan::{BroadcastPlan, StridePlan};
pub use shape::{broadcast_shape, broadcast_shapes, calc_broadcast_shapes, can_broadcast, pad_shape};
pub use values::BroadcastIterator;
