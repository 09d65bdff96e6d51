use crate::shape::{broadcast_shapes, pad_shape, pad_strides};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stridex_core::{
    error::{Error, Result},
    layout::Layout,
};

/// Per-operand addressing plan against a broadcast shape.
///
/// `strides[d]` is 0 on every axis the operand repeats, and
/// `deltas[d] == strides[d] * shape[d]` is the offset accumulated by one
/// full sweep of axis `d`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StridePlan {
    padded_shape: Vec<usize>,
    strides: Vec<isize>,
    deltas: Vec<isize>,
    start: usize,
    max_index: usize,
    elements_per_item: usize,
}

impl StridePlan {
    pub fn new(layout: &Layout, broadcast_shape: &[usize]) -> Result<Self> {
        plan(
            layout.shape(),
            layout.strides(),
            layout.offset(),
            layout.elements_per_item(),
            broadcast_shape,
        )
    }

    pub fn padded_shape(&self) -> &[usize] {
        &self.padded_shape
    }
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }
    pub fn deltas(&self) -> &[isize] {
        &self.deltas
    }
    pub fn start(&self) -> usize {
        self.start
    }
    /// Exhaustion sentinel: never a slot the plan can address.
    pub fn max_index(&self) -> usize {
        self.max_index
    }
    pub fn elements_per_item(&self) -> usize {
        self.elements_per_item
    }
}

/// Plans strides, deltas and the exhaustion sentinel of one operand.
pub fn plan(
    shape: &[usize],
    strides: &[isize],
    offset: usize,
    elements_per_item: usize,
    broadcast_shape: &[usize],
) -> Result<StridePlan> {
    let rank = broadcast_shape.len();
    let padding = rank as isize - shape.len() as isize;
    let padded_shape = pad_shape(shape, padding)?;
    let native = pad_strides(strides, padding)?;

    let mut plan_strides = Vec::with_capacity(rank);
    let mut deltas = Vec::with_capacity(rank);
    for d in 0..rank {
        let (extent, target) = (padded_shape[d], broadcast_shape[d]);
        if extent != target && extent != 1 {
            return Err(Error::ShapeMismatch {
                dim: d,
                lhs: extent,
                rhs: target,
            });
        }

        let stride = if extent == 1 && target > 1 { 0 } else { native[d] };
        plan_strides.push(stride);
        deltas.push(stride * target as isize);
    }

    let max_index = exhaustion_sentinel(offset, elements_per_item, &plan_strides, &deltas, broadcast_shape);

    Ok(StridePlan {
        padded_shape,
        strides: plan_strides,
        deltas,
        start: offset,
        max_index,
        elements_per_item,
    })
}

// `start + max(delta)`, raised to one past the furthest reachable slot for
// layouts with negative or overlapping strides.
fn exhaustion_sentinel(start: usize, step: usize, strides: &[isize], deltas: &[isize], shape: &[usize]) -> usize {
    if shape.is_empty() {
        return start + step;
    }

    let start = start as isize;
    let max_delta = deltas.iter().copied().max().unwrap_or(0);
    let span: isize = strides
        .iter()
        .zip(shape.iter())
        .map(|(&s, &n)| (s * (n as isize - 1)).max(0))
        .sum();

    (start + max_delta).max(start + span + step as isize) as usize
}

/// Broadcast shape plus one [`StridePlan`] per operand layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BroadcastPlan {
    shape: Vec<usize>,
    operands: Vec<StridePlan>,
}

impl BroadcastPlan {
    pub fn new(layouts: &[&Layout]) -> Result<Self> {
        let shapes: Vec<&[usize]> = layouts.iter().map(|l| l.shape()).collect();
        let (shape, _) = broadcast_shapes(&shapes)?;

        let operands = layouts
            .iter()
            .map(|l| StridePlan::new(l, &shape))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { shape, operands })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of traversal steps; 1 for a rank-0 shape.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn operands(&self) -> &[StridePlan] {
        &self.operands
    }

    pub fn operand(&self, i: usize) -> Option<&StridePlan> {
        self.operands.get(i)
    }
}
