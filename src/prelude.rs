pub use crate::array::Array;
pub use crate::broadcast::{
    broadcast_shape, BroadcastIndexIterator, BroadcastIterator, BroadcastPlan, IndexIterator, Operand, OutputSpec,
};
pub use crate::core::{
    dtype::{get_default_dtype, set_default_dtype, DType},
    error::{Error, Result},
    layout::Layout,
    scalar::Scalar,
};
