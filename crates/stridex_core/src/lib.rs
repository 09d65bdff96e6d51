pub mod buffer;
pub mod dtype;
pub mod error;
pub mod layout;
pub mod scalar;
