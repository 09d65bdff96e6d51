//! Shape broadcasting.
//!
//! Shapes are aligned at their trailing (fastest-varying) end by prefixing
//! the lower-rank ones with singleton axes. At every axis the non-1 extents
//! must agree; that extent becomes the broadcast extent, or 1 when every
//! operand has a singleton there.

use stridex_core::error::{Error, Result};

/// Prefixes `shape` with `padding` ones.
///
/// Fails with [`Error::InvalidPadding`] for a negative `padding`.
pub fn pad_shape(shape: &[usize], padding: isize) -> Result<Vec<usize>> {
    if padding < 0 {
        return Err(Error::InvalidPadding { padding });
    }

    let mut padded = vec![1; padding as usize];
    padded.extend_from_slice(shape);
    Ok(padded)
}

/// Same as [`pad_shape`] for stride vectors: padded axes get stride 0.
pub fn pad_strides(strides: &[isize], padding: isize) -> Result<Vec<isize>> {
    if padding < 0 {
        return Err(Error::InvalidPadding { padding });
    }

    let mut padded = vec![0; padding as usize];
    padded.extend_from_slice(strides);
    Ok(padded)
}

/// Computes the common broadcast shape of `shapes`.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>> {
    broadcast_shapes(shapes).map(|(shape, _)| shape)
}

/// Computes the broadcast shape together with every operand's shape padded
/// to the broadcast rank.
pub fn broadcast_shapes(shapes: &[&[usize]]) -> Result<(Vec<usize>, Vec<Vec<usize>>)> {
    let max_rank = shapes.iter().map(|s| s.len()).max().unwrap_or(0);

    let padded = shapes
        .iter()
        .map(|s| pad_shape(s, max_rank as isize - s.len() as isize))
        .collect::<Result<Vec<_>>>()?;

    let mut result = Vec::with_capacity(max_rank);
    for dim in 0..max_rank {
        let mut extent: Option<usize> = None;
        for shape in &padded {
            let e = shape[dim];
            if e == 1 {
                continue;
            }
            match extent {
                None => extent = Some(e),
                Some(m) if m != e => {
                    return Err(Error::ShapeMismatch { dim, lhs: m, rhs: e });
                }
                Some(_) => {}
            }
        }
        result.push(extent.unwrap_or(1));
    }

    Ok((result, padded))
}

pub fn can_broadcast(lhs: &[usize], rhs: &[usize]) -> bool {
    broadcast_shape(&[lhs, rhs]).is_ok()
}

/// Checks whether an array of `old_shape` holding `size` items can be
/// broadcast to `new_shape`.
///
/// Returns the array shape padded to the target rank together with the
/// (possibly padded) target, or `None` when the shapes are incompatible.
/// An empty target only accepts single-item arrays, and a target of lower
/// rank than the array is itself padded with leading ones.
pub fn calc_broadcast_shapes(old_shape: &[usize], size: usize, new_shape: &[usize]) -> Option<(Vec<usize>, Vec<usize>)> {
    if new_shape.is_empty() {
        return if size == 1 {
            Some((old_shape.to_vec(), Vec::new()))
        } else {
            None
        };
    }

    if old_shape == new_shape {
        return Some((old_shape.to_vec(), new_shape.to_vec()));
    }

    let offset = new_shape.len() as isize - old_shape.len() as isize;
    let (padded_old, target) = if offset < 0 {
        (old_shape.to_vec(), pad_shape(new_shape, -offset).ok()?)
    } else {
        (pad_shape(old_shape, offset).ok()?, new_shape.to_vec())
    };

    let compatible = padded_old
        .iter()
        .zip(target.iter())
        .all(|(&o, &n)| o == n || o == 1 || n == 1);

    compatible.then_some((padded_old, target))
}
