#![allow(non_upper_case_globals)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const bfloat16: DType = DType::BF16;
pub const float16: DType = DType::F16;
pub const half: DType = DType::F16;
pub const float32: DType = DType::F32;
pub const float64: DType = DType::F64;
pub const bool: DType = DType::BOOL;
pub const uint8: DType = DType::U8;
pub const uint32: DType = DType::U32;
pub const int8: DType = DType::I8;
pub const int32: DType = DType::I32;
pub const int64: DType = DType::I64;
pub const complex64: DType = DType::C64;
pub const complex128: DType = DType::C128;

/// Element type of an array.
///
/// Composite types (`C64`, `C128`) occupy more than one storage slot per
/// logical item; every slot has the type returned by [`DType::slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DType {
    BF16,
    F16,
    F32,
    F64,
    BOOL,
    U8,
    U32,
    I8,
    I32,
    I64,
    C64,
    C128,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BF16 => "bf16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::BOOL => "bool",
            Self::U8 => "u8",
            Self::U32 => "u32",
            Self::I8 => "i8",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::C64 => "c64",
            Self::C128 => "c128",
        }
    }

    /// Type of a single storage slot.
    pub fn slot(&self) -> DType {
        match self {
            Self::C64 => Self::F32,
            Self::C128 => Self::F64,
            other => *other,
        }
    }

    /// Number of storage slots making up one logical item.
    pub fn elements_per_item(&self) -> usize {
        match self {
            Self::C64 | Self::C128 => 2,
            _ => 1,
        }
    }

    /// Size of one storage slot in bytes.
    pub fn size_in_bytes(&self) -> usize {
        match self.slot() {
            Self::BF16 => 2,
            Self::F16 => 2,
            Self::F32 => 4,
            Self::F64 => 8,
            Self::BOOL => 1,
            Self::U8 => 1,
            Self::U32 => 4,
            Self::I8 => 1,
            Self::I32 => 4,
            Self::I64 => 8,
            Self::C64 | Self::C128 => unreachable!("slot type is never composite"),
        }
    }

    pub fn is_complex(&self) -> bool {
        self.elements_per_item() > 1
    }
}

thread_local! {
    static DEFAULT_DTYPE: std::cell::Cell<DType> = const { std::cell::Cell::new(DType::F64) };
}

pub fn get_default_dtype() -> DType {
    DEFAULT_DTYPE.with(|d| d.get())
}

pub fn set_default_dtype(dtype: DType) {
    DEFAULT_DTYPE.with(|d| d.set(dtype));
}
