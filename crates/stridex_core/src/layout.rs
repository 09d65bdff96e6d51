use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a logical array maps onto its storage slots.
///
/// Strides and the offset are measured in storage slots, not items, so a
/// composite element with `elements_per_item == 2` has an innermost
/// contiguous stride of 2.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<isize>,
    offset: usize,
    elements_per_item: usize,
}

impl Layout {
    pub fn new(shape: &[usize], strides: &[isize], offset: usize, elements_per_item: usize) -> Result<Self> {
        if shape.len() != strides.len() {
            return Err(Error::InvalidShape {
                message: format!("shape {:?} and strides {:?} differ in rank", shape, strides),
            });
        }
        if elements_per_item == 0 {
            return Err(Error::InvalidArgument("elements per item must be at least 1".into()));
        }

        // negative strides must not reach below slot 0
        if shape.iter().all(|&n| n > 0) {
            let lowest = shape
                .iter()
                .zip(strides.iter())
                .fold(offset as isize, |acc, (&n, &s)| acc + (s * (n as isize - 1)).min(0));
            if lowest < 0 {
                return Err(Error::InvalidShape {
                    message: format!(
                        "strides {:?} from offset {} reach slot {} below the start of storage",
                        strides, offset, lowest
                    ),
                });
            }
        }

        Ok(Self {
            shape: shape.to_vec(),
            strides: strides.to_vec(),
            offset,
            elements_per_item,
        })
    }

    pub fn from_shape(shape: &[usize], elements_per_item: usize) -> Self {
        Self {
            shape: shape.to_vec(),
            strides: Self::compute_strides(shape, elements_per_item),
            offset: 0,
            elements_per_item: elements_per_item.max(1),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
    pub fn size_dim(&self, dim: usize) -> Option<usize> {
        self.shape.get(dim).copied()
    }
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn elements_per_item(&self) -> usize {
        self.elements_per_item
    }

    pub fn is_contiguous(&self) -> bool {
        self.strides == Self::compute_strides(&self.shape, self.elements_per_item)
    }

    /// Storage slot holding the first slot of the item at `pos`.
    pub fn slot_of(&self, pos: &[usize]) -> Result<usize> {
        if pos.len() != self.ndim() {
            return Err(Error::InvalidArgument(format!(
                "position {:?} does not match rank {}",
                pos,
                self.ndim()
            )));
        }

        let mut slot = self.offset as isize;
        for (d, (&p, &s)) in pos.iter().zip(self.strides.iter()).enumerate() {
            if p >= self.shape[d] {
                return Err(Error::IndexOutOfBounds {
                    index: p,
                    size: self.shape[d],
                });
            }
            slot += p as isize * s;
        }

        Ok(slot as usize)
    }

    /// Largest slot touched by this layout, plus one.
    pub fn required_len(&self) -> usize {
        if self.size() == 0 {
            return self.offset;
        }

        let mut last = self.offset as isize;
        for (&n, &s) in self.shape.iter().zip(self.strides.iter()) {
            if s > 0 {
                last += (n as isize - 1) * s;
            }
        }

        last as usize + self.elements_per_item
    }

    pub fn view(&mut self, new_shape: &[usize]) -> Result<()> {
        let old_size = self.size();
        let new_size: usize = new_shape.iter().product();

        if old_size != new_size {
            return Err(Error::InvalidShape {
                message: format!("Cannot reshape layout of size {} to size {}", old_size, new_size),
            });
        }
        if !self.is_contiguous() {
            return Err(Error::InvalidShape {
                message: format!("Cannot reshape non-contiguous layout with strides {:?}", self.strides),
            });
        }

        self.shape = new_shape.to_vec();
        self.strides = Self::compute_strides(new_shape, self.elements_per_item);

        Ok(())
    }

    pub fn transpose(&mut self, dim0: usize, dim1: usize) -> Result<()> {
        if dim0 >= self.ndim() || dim1 >= self.ndim() {
            return Err(Error::InvalidArgument(format!(
                "cannot transpose dimensions {} and {} of a rank {} layout",
                dim0,
                dim1,
                self.ndim()
            )));
        }

        self.shape.swap(dim0, dim1);
        self.strides.swap(dim0, dim1);

        Ok(())
    }

    /// Restricts `dim` to `[start, start + length)`.
    pub fn narrow(&mut self, dim: usize, start: usize, length: usize) -> Result<()> {
        let extent = self.size_dim(dim).ok_or_else(|| {
            Error::InvalidArgument(format!("dimension {} out of range for rank {}", dim, self.ndim()))
        })?;
        if start + length > extent {
            return Err(Error::IndexOutOfBounds {
                index: start + length,
                size: extent,
            });
        }

        self.offset = (self.offset as isize + start as isize * self.strides[dim]) as usize;
        self.shape[dim] = length;

        Ok(())
    }

    /// Reverses the traversal direction of `dim`.
    pub fn flip(&mut self, dim: usize) -> Result<()> {
        let extent = self.size_dim(dim).ok_or_else(|| {
            Error::InvalidArgument(format!("dimension {} out of range for rank {}", dim, self.ndim()))
        })?;

        if extent > 0 {
            self.offset = (self.offset as isize + (extent as isize - 1) * self.strides[dim]) as usize;
        }
        self.strides[dim] = -self.strides[dim];

        Ok(())
    }

    // helper

    pub fn compute_strides(shape: &[usize], elements_per_item: usize) -> Vec<isize> {
        if shape.is_empty() {
            return vec![];
        }

        let mut strides = vec![elements_per_item.max(1) as isize; shape.len()];
        for i in (0..shape.len() - 1).rev() {
            strides[i] = strides[i + 1] * shape[i + 1] as isize;
        }
        strides
    }
}
