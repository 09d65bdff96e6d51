//! Odometer traversal of two operands (and an optional output) over their
//! broadcast shape.
//!
//! Every operand keeps a running slot index. Moving along axis `d` adds
//! `strides[d]`; when the counter of `d` wraps, `deltas[d]` is subtracted and
//! the carry moves on to the next slower axis. A step therefore costs a
//! handful of additions and never allocates.

use crate::{
    alias::OutputSpec,
    plan::StridePlan,
    shape::broadcast_shapes,
};
use stridex_core::{
    error::{Error, Result},
    layout::Layout,
};

/// Pull-based traversal over a multi-dimensional index space.
pub trait IndexIterator {
    /// Moves to the next position. Returns false once the traversal is over;
    /// further calls keep returning false.
    fn advance(&mut self) -> bool;

    /// Rewinds to the state right after construction.
    fn reset(&mut self);

    /// Current multi-dimensional position.
    fn current_position(&self) -> &[usize];

    fn shape(&self) -> &[usize];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first position.
    Ready,
    Active,
    /// Terminal; indices sit on their sentinels.
    Exhausted,
}

/// Slot indices of one traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub a: usize,
    pub b: usize,
    pub output: Option<usize>,
}

#[derive(Debug, Clone)]
enum OutputStream {
    None,
    AliasA,
    AliasB,
    Own(StridePlan),
}

#[derive(Debug, Clone)]
struct IterationState {
    pos: Vec<usize>,
    a: isize,
    b: isize,
    o: isize,
    phase: Phase,
}

#[derive(Debug, Clone)]
pub struct BroadcastIndexIterator {
    shape: Vec<usize>,
    len: usize,
    a: StridePlan,
    b: StridePlan,
    output: OutputStream,
    state: IterationState,
}

impl BroadcastIndexIterator {
    pub fn new(a: &Layout, b: &Layout, output: OutputSpec<'_>) -> Result<Self> {
        let (shape, _) = broadcast_shapes(&[a.shape(), b.shape()])?;

        let output = match output {
            OutputSpec::None => OutputStream::None,
            OutputSpec::AliasA => {
                check_output_shape(&shape, a.shape())?;
                OutputStream::AliasA
            }
            OutputSpec::AliasB => {
                check_output_shape(&shape, b.shape())?;
                OutputStream::AliasB
            }
            OutputSpec::Distinct(layout) => {
                check_output_shape(&shape, layout.shape())?;
                OutputStream::Own(StridePlan::new(layout, &shape)?)
            }
        };

        let a = StridePlan::new(a, &shape)?;
        let b = StridePlan::new(b, &shape)?;

        tracing::debug!(
            shape = ?shape,
            a.strides = ?a.strides(),
            b.strides = ?b.strides(),
            "planned broadcast traversal"
        );

        let rank = shape.len();
        let mut iter = Self {
            len: shape.iter().product(),
            shape,
            a,
            b,
            output,
            state: IterationState {
                pos: vec![0; rank],
                a: 0,
                b: 0,
                o: 0,
                phase: Phase::Ready,
            },
        };
        iter.reset();

        Ok(iter)
    }

    /// Number of successful advances in a full traversal.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.phase == Phase::Exhausted
    }

    pub fn a_plan(&self) -> &StridePlan {
        &self.a
    }

    pub fn b_plan(&self) -> &StridePlan {
        &self.b
    }

    /// Plan of a distinct output; `None` when there is no output or it
    /// aliases an input.
    pub fn output_plan(&self) -> Option<&StridePlan> {
        match &self.output {
            OutputStream::Own(plan) => Some(plan),
            _ => None,
        }
    }

    #[inline]
    pub fn a_index(&self) -> usize {
        self.state.a as usize
    }

    #[inline]
    pub fn b_index(&self) -> usize {
        self.state.b as usize
    }

    #[inline]
    pub fn output_index(&self) -> Option<usize> {
        match self.output {
            OutputStream::None => None,
            OutputStream::AliasA => Some(self.state.a as usize),
            OutputStream::AliasB => Some(self.state.b as usize),
            OutputStream::Own(_) => Some(self.state.o as usize),
        }
    }

    #[inline]
    pub fn step(&self) -> Step {
        Step {
            a: self.a_index(),
            b: self.b_index(),
            output: self.output_index(),
        }
    }

    fn exhaust(&mut self) {
        self.state.phase = Phase::Exhausted;
        self.state.a = self.a.max_index() as isize;
        self.state.b = self.b.max_index() as isize;
        if let OutputStream::Own(plan) = &self.output {
            self.state.o = plan.max_index() as isize;
        }
        tracing::trace!(steps = self.len, "broadcast traversal exhausted");
    }
}

impl IndexIterator for BroadcastIndexIterator {
    fn advance(&mut self) -> bool {
        match self.state.phase {
            Phase::Exhausted => return false,
            Phase::Ready => {
                if self.len == 0 {
                    self.exhaust();
                    return false;
                }
                self.state.phase = Phase::Active;
                return true;
            }
            Phase::Active => {}
        }

        let state = &mut self.state;
        let own = match &self.output {
            OutputStream::Own(plan) => Some(plan),
            _ => None,
        };

        // rank 0 has a single position, already visited
        for d in (0..self.shape.len()).rev() {
            state.pos[d] += 1;
            state.a += self.a.strides()[d];
            state.b += self.b.strides()[d];
            if let Some(o) = own {
                state.o += o.strides()[d];
            }

            if state.pos[d] < self.shape[d] {
                return true;
            }

            state.pos[d] = 0;
            state.a -= self.a.deltas()[d];
            state.b -= self.b.deltas()[d];
            if let Some(o) = own {
                state.o -= o.deltas()[d];
            }
        }

        self.exhaust();
        false
    }

    fn reset(&mut self) {
        self.state.pos.fill(0);
        self.state.a = self.a.start() as isize;
        self.state.b = self.b.start() as isize;
        self.state.o = match &self.output {
            OutputStream::Own(plan) => plan.start() as isize,
            _ => 0,
        };
        self.state.phase = Phase::Ready;
        tracing::trace!(shape = ?self.shape, "broadcast traversal reset");
    }

    fn current_position(&self) -> &[usize] {
        &self.state.pos
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl Iterator for BroadcastIndexIterator {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().then(|| self.step())
    }
}

fn check_output_shape(broadcast: &[usize], output: &[usize]) -> Result<()> {
    if broadcast != output {
        return Err(Error::OutputShapeMismatch {
            expected: broadcast.to_vec(),
            got: output.to_vec(),
        });
    }
    Ok(())
}
