use crate::{
    alias::resolve_output,
    iterator::{BroadcastIndexIterator, IndexIterator},
    operand::Operand,
};
use stridex_core::error::{Error, Result};

/// Broadcast traversal that also reads the input values.
///
/// A cached input value is refreshed only when that input's slot index
/// changes, so an operand repeated along a broadcast axis is read once per
/// sweep of that axis rather than once per step.
pub struct BroadcastIterator<'a, T: Operand> {
    indices: BroadcastIndexIterator,
    a: &'a T,
    b: &'a T,
    output: Option<&'a T>,
    a_value: f64,
    b_value: f64,
    a_cached: Option<usize>,
    b_cached: Option<usize>,
}

impl<'a, T: Operand> BroadcastIterator<'a, T> {
    pub fn new(a: &'a T, b: &'a T) -> Result<Self> {
        Self::with_output(a, b, None)
    }

    /// `output` may be `a`, `b`, or a separate array of the broadcast shape.
    pub fn with_output(a: &'a T, b: &'a T, output: Option<&'a T>) -> Result<Self> {
        let spec = resolve_output(a, b, output);
        let indices = BroadcastIndexIterator::new(a.layout(), b.layout(), spec)?;

        Ok(Self {
            indices,
            a,
            b,
            output,
            a_value: 0.0,
            b_value: 0.0,
            a_cached: None,
            b_cached: None,
        })
    }

    /// Moves to the next position and refreshes the input values whose
    /// index moved. Storage errors are passed through unchanged.
    pub fn advance(&mut self) -> Result<bool> {
        if !self.indices.advance() {
            return Ok(false);
        }

        let a_index = self.indices.a_index();
        if self.a_cached != Some(a_index) {
            self.a_value = self.a.value_at(a_index)?;
            self.a_cached = Some(a_index);
        }

        let b_index = self.indices.b_index();
        if self.b_cached != Some(b_index) {
            self.b_value = self.b.value_at(b_index)?;
            self.b_cached = Some(b_index);
        }

        Ok(true)
    }

    pub fn reset(&mut self) {
        self.indices.reset();
        self.a_cached = None;
        self.b_cached = None;
    }

    /// Writes `value` to the output at the current position.
    pub fn store(&self, value: f64) -> Result<()> {
        match (self.output, self.indices.output_index()) {
            (Some(out), Some(index)) => out.set_value_at(index, value),
            _ => Err(Error::InvalidArgument("broadcast iterator has no output operand".into())),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.indices.shape()
    }

    pub fn current_position(&self) -> &[usize] {
        self.indices.current_position()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.indices.is_exhausted()
    }

    pub fn a_index(&self) -> usize {
        self.indices.a_index()
    }

    pub fn b_index(&self) -> usize {
        self.indices.b_index()
    }

    pub fn output_index(&self) -> Option<usize> {
        self.indices.output_index()
    }

    pub fn a_value(&self) -> f64 {
        self.a_value
    }

    pub fn b_value(&self) -> f64 {
        self.b_value
    }

    pub fn indices(&self) -> &BroadcastIndexIterator {
        &self.indices
    }
}
