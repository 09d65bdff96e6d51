use crate::dtype::DType;
use half::{bf16, f16};

macro_rules! numeric_variants {
    ($($variant:ident => $type:ty),* $(,)?) => {
        /// Value of a single storage slot.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Scalar {
            BOOL(bool),
            $($variant($type),)*
        }

        impl Scalar {
            #[inline]
            pub fn new<T: Into<Self>>(value: T) -> Self {
                value.into()
            }

            #[inline]
            pub fn dtype(&self) -> DType {
                match self {
                    Self::BOOL(_) => DType::BOOL,
                    $(Self::$variant(_) => DType::$variant,)*
                }
            }

            #[inline]
            pub fn as_f64_any(&self) -> f64 {
                match *self {
                    Self::BOOL(x) => if x { 1.0 } else { 0.0 },
                    $(
                        Self::$variant(x) => {
                            numeric_variants!(@as_f64 $variant, x)
                        },
                    )*
                }
            }

            /// Converts `value` into a slot of `dtype`, saturating integers.
            /// Composite dtypes resolve to their slot type.
            #[inline]
            pub fn from_f64(dtype: DType, value: f64) -> Self {
                match dtype.slot() {
                    DType::BOOL => Self::BOOL(value != 0.0),
                    $(DType::$variant => Self::$variant(numeric_variants!(@convert $variant => value)),)*
                    DType::C64 | DType::C128 => unreachable!("slot type is never composite"),
                }
            }

            $(
                paste::paste! {
                    #[inline]
                    pub fn [<as_ $variant:lower>](&self) -> $type {
                        match *self {
                            Self::$variant(x) => x,
                            _ => numeric_variants!(@convert $variant => self.as_f64_any()),
                        }
                    }
                }
            )*

            #[inline]
            pub fn as_bool(&self) -> bool {
                match *self {
                    Self::BOOL(x) => x,
                    _ => self.as_f64_any() != 0.0,
                }
            }

            /// Decodes one little-endian slot of `dtype` from `bytes`.
            pub fn from_le_bytes(dtype: DType, bytes: &[u8]) -> Self {
                match dtype.slot() {
                    DType::BOOL => Self::BOOL(bytes[0] != 0),
                    $(
                        DType::$variant => {
                            let mut raw = [0u8; std::mem::size_of::<$type>()];
                            raw.copy_from_slice(&bytes[..std::mem::size_of::<$type>()]);
                            Self::$variant(<$type>::from_le_bytes(raw))
                        }
                    )*
                    DType::C64 | DType::C128 => unreachable!("slot type is never composite"),
                }
            }

            /// Encodes this slot into `bytes` (little-endian).
            pub fn write_le_bytes(&self, bytes: &mut [u8]) {
                match *self {
                    Self::BOOL(x) => bytes[0] = x as u8,
                    $(
                        Self::$variant(x) => {
                            let raw = x.to_le_bytes();
                            bytes[..raw.len()].copy_from_slice(&raw);
                        }
                    )*
                }
            }
        }

        impl From<bool> for Scalar {
            #[inline]
            fn from(x: bool) -> Self {
                Self::BOOL(x)
            }
        }

        $(
            impl From<$type> for Scalar {
                #[inline]
                fn from(x: $type) -> Self {
                    Self::$variant(x)
                }
            }
        )*
    };

    (@as_f64 BF16, $x:ident) => {
        f32::from($x) as f64
    };
    (@as_f64 F16, $x:ident) => {
        f32::from($x) as f64
    };
    (@as_f64 F32, $x:ident) => {
        $x as f64
    };
    (@as_f64 F64, $x:ident) => {
        $x
    };
    (@as_f64 U8,  $x:ident) => {
        $x as f64
    };
    (@as_f64 I8,  $x:ident) => {
        $x as f64
    };
    (@as_f64 U32, $x:ident) => {
        $x as f64
    };
    (@as_f64 I32, $x:ident) => {
        $x as f64
    };
    (@as_f64 I64, $x:ident) => {
        $x as f64
    };

    (@convert BF16 => $val:expr) => {
        bf16::from_f32($val as f32)
    };
    (@convert F16 => $val:expr) => {
        f16::from_f32($val as f32)
    };
    (@convert F32 => $val:expr) => {
        $val as f32
    };
    (@convert F64 => $val:expr) => {
        $val
    };
    (@convert U8  => $val:expr) => {
        $val.clamp(0.0, u8::MAX as f64) as u8
    };
    (@convert I8  => $val:expr) => {
        $val.clamp(i8::MIN as f64, i8::MAX as f64) as i8
    };
    (@convert U32 => $val:expr) => {
        $val.clamp(0.0, u32::MAX as f64) as u32
    };
    (@convert I32 => $val:expr) => {
        $val.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    };
    (@convert I64 => $val:expr) => {
        $val.clamp(i64::MIN as f64, i64::MAX as f64) as i64
    };
}

numeric_variants! {
    BF16 => bf16,
    F16  => f16,
    F32  => f32,
    F64  => f64,
    U8   => u8,
    I8   => i8,
    U32  => u32,
    I32  => i32,
    I64  => i64,
}
