use crate::{utils::promotion::get_promoted_dtype, Array};
use paste::paste;
use stridex_broadcast::{broadcast_shape, BroadcastIterator};
use stridex_core::{
    dtype::DType,
    error::{Error, Result},
};

fn arithmetic_dtype(lhs: DType, rhs: DType) -> Result<DType> {
    for dtype in [lhs, rhs] {
        if dtype.is_complex() {
            return Err(Error::UnsupportedDType(dtype));
        }
    }
    Ok(get_promoted_dtype(lhs, rhs))
}

// Walks `lhs` and `rhs` in broadcast order and stores `op` of each pair into `out`.
fn apply(lhs: &Array, rhs: &Array, out: &Array, op: impl Fn(f64, f64) -> f64) -> Result<()> {
    if out.dtype().is_complex() {
        return Err(Error::UnsupportedDType(out.dtype()));
    }

    let mut iter = BroadcastIterator::with_output(lhs, rhs, Some(out))?;
    while iter.advance()? {
        iter.store(op(iter.a_value(), iter.b_value()))?;
    }
    Ok(())
}

macro_rules! binary_ops {
    ($($name:ident => $op:expr),* $(,)?) => {
        paste! {
            impl Array {
                $(
                    pub fn $name(&self, rhs: &Array) -> Result<Array> {
                        let dtype = arithmetic_dtype(self.dtype(), rhs.dtype())?;
                        let shape = broadcast_shape(&[self.shape(), rhs.shape()])?;
                        let result = Array::zeros_with_dtype(&shape, dtype)?;
                        apply(self, rhs, &result, $op)?;
                        Ok(result)
                    }

                    /// Writes into `out`, which must have the broadcast shape
                    /// and may be `self` or `rhs`.
                    pub fn [<$name _into>](&self, rhs: &Array, out: &Array) -> Result<()> {
                        arithmetic_dtype(self.dtype(), rhs.dtype())?;
                        apply(self, rhs, out, $op)
                    }
                )*
            }
        }
    };
}

macro_rules! inplace_ops {
    ($($name:ident => $op:expr),* $(,)?) => {
        paste! {
            impl Array {
                $(
                    /// In place; `rhs` must broadcast to the shape of `self`.
                    pub fn [<$name _>](&mut self, rhs: &Array) -> Result<()> {
                        arithmetic_dtype(self.dtype(), rhs.dtype())?;
                        let this = &*self;
                        apply(this, rhs, this, $op)
                    }
                )*
            }
        }
    };
}

binary_ops! {
    add => |a, b| a + b,
    sub => |a, b| a - b,
    mul => |a, b| a * b,
    div => |a, b| a / b,
    maximum => f64::max,
    minimum => f64::min,
}

inplace_ops! {
    add => |a, b| a + b,
    sub => |a, b| a - b,
    mul => |a, b| a * b,
    div => |a, b| a / b,
}
