pub mod prelude;

pub use stridex_array as array;
pub use stridex_broadcast as broadcast;
pub use stridex_core as core;

pub use stridex_core::dtype::{bfloat16, complex128, complex64, float16, float32, float64, half, int32, int64, int8, uint32, uint8};
