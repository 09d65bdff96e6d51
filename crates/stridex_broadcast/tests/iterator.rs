mod utils;

use stridex_broadcast::{BroadcastIterator, Operand};
use stridex_core::{
    error::{Error, Result},
    layout::Layout,
};
use utils::{naive_index, Recorded};

#[test]
fn pairs_values_in_row_major_order() -> Result<()> {
    let a = Recorded::new(vec![10.0, 20.0, 30.0], &[1, 3]);
    let b = Recorded::new(vec![1.0, 2.0], &[2, 1]);
    let mut iter = BroadcastIterator::new(&a, &b)?;

    assert_eq!(iter.shape(), &[2, 3]);
    let mut pairs = Vec::new();
    while iter.advance()? {
        pairs.push((iter.a_value(), iter.b_value()));
    }

    assert_eq!(
        pairs,
        vec![(10.0, 1.0), (20.0, 1.0), (30.0, 1.0), (10.0, 2.0), (20.0, 2.0), (30.0, 2.0)]
    );
    Ok(())
}

#[test]
fn repeated_operand_is_read_once_per_sweep() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0, 3.0], &[3, 1]);
    let b = Recorded::new(vec![1.0, 2.0, 3.0, 4.0], &[1, 4]);
    let mut iter = BroadcastIterator::new(&a, &b)?;

    let mut last_a = None;
    let mut steps = 0;
    while iter.advance()? {
        if iter.current_position()[1] > 0 {
            assert_eq!(Some(iter.a_index()), last_a);
        }
        last_a = Some(iter.a_index());
        steps += 1;
    }

    assert_eq!(steps, 12);
    assert_eq!(a.reads(), 3);
    assert_eq!(b.reads(), 12);
    Ok(())
}

#[test]
fn scalar_operand_is_read_once() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let b = Recorded::new(vec![7.0], &[]);
    let mut iter = BroadcastIterator::new(&a, &b)?;

    while iter.advance()? {
        assert_eq!(iter.b_value(), 7.0);
    }
    assert_eq!(b.reads(), 1);
    Ok(())
}

#[test]
fn reset_rereads_and_replays() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0], &[2]);
    let b = Recorded::new(vec![3.0, 4.0, 5.0, 6.0], &[2, 2]);
    let mut iter = BroadcastIterator::new(&a, &b)?;

    let mut first = Vec::new();
    while iter.advance()? {
        first.push((iter.current_position().to_vec(), iter.a_index(), iter.b_index(), iter.a_value(), iter.b_value()));
    }
    assert!(iter.is_exhausted());

    iter.reset();
    let mut second = Vec::new();
    while iter.advance()? {
        second.push((iter.current_position().to_vec(), iter.a_index(), iter.b_index(), iter.a_value(), iter.b_value()));
    }

    assert_eq!(first, second);
    assert_eq!(a.reads(), 8);
    Ok(())
}

#[test]
fn in_place_output_tracks_input_a() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let b = Recorded::new(vec![10.0, 20.0, 30.0], &[3]);
    let out = a.clone();
    let mut iter = BroadcastIterator::with_output(&a, &b, Some(&out))?;

    assert!(iter.indices().output_plan().is_none());
    while iter.advance()? {
        assert_eq!(iter.output_index(), Some(iter.a_index()));
        iter.store(iter.a_value() + iter.b_value())?;
    }

    assert_eq!(a.values(), vec![11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
    Ok(())
}

#[test]
fn in_place_output_tracks_input_b() -> Result<()> {
    let a = Recorded::new(vec![2.0], &[1]);
    let b = Recorded::new(vec![1.0, 2.0, 3.0], &[3]);
    let out = b.clone();
    let mut iter = BroadcastIterator::with_output(&a, &b, Some(&out))?;

    while iter.advance()? {
        assert_eq!(iter.output_index(), Some(iter.b_index()));
        iter.store(iter.a_value() * iter.b_value())?;
    }

    assert_eq!(b.values(), vec![2.0, 4.0, 6.0]);
    Ok(())
}

#[test]
fn other_view_of_same_storage_is_not_an_alias() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let mut transposed = a.layout().clone();
    transposed.transpose(0, 1)?;
    let out = a.with_layout(transposed);
    let b = Recorded::new(vec![0.0], &[]);

    let mut iter = BroadcastIterator::with_output(&a, &b, Some(&out))?;
    assert!(iter.indices().output_plan().is_some());

    let mut outputs = Vec::new();
    while iter.advance()? {
        outputs.push(iter.output_index());
    }
    assert_eq!(outputs, vec![Some(0), Some(2), Some(1), Some(3)]);
    Ok(())
}

#[test]
fn distinct_output_receives_results() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0], &[2, 1]);
    let b = Recorded::new(vec![10.0, 20.0, 30.0], &[3]);
    let out = Recorded::zeros(&[2, 3]);
    let mut iter = BroadcastIterator::with_output(&a, &b, Some(&out))?;

    while iter.advance()? {
        iter.store(iter.a_value() + iter.b_value())?;
    }
    assert_eq!(out.values(), vec![11.0, 21.0, 31.0, 12.0, 22.0, 32.0]);
    Ok(())
}

#[test]
fn explicit_output_must_have_broadcast_shape() {
    let a = Recorded::new(vec![1.0, 2.0], &[2, 1]);
    let b = Recorded::new(vec![1.0, 2.0, 3.0], &[3]);
    let out = Recorded::zeros(&[3, 2]);

    let err = BroadcastIterator::with_output(&a, &b, Some(&out)).err();
    assert_eq!(
        err,
        Some(Error::OutputShapeMismatch {
            expected: vec![2, 3],
            got: vec![3, 2],
        })
    );
}

#[test]
fn store_without_output_fails() -> Result<()> {
    let a = Recorded::new(vec![1.0], &[1]);
    let b = Recorded::new(vec![1.0], &[1]);
    let mut iter = BroadcastIterator::new(&a, &b)?;

    assert!(iter.advance()?);
    assert!(iter.store(1.0).is_err());
    Ok(())
}

#[test]
fn storage_errors_propagate() -> Result<()> {
    let a = Recorded::new(vec![1.0, 2.0, 3.0], &[3]);
    let short = Recorded::new(vec![1.0, 2.0], &[2]);
    let b = short.with_layout(Layout::from_shape(&[3], 1));
    let mut iter = BroadcastIterator::new(&a, &b)?;

    assert!(iter.advance()?);
    assert!(iter.advance()?);
    assert_eq!(iter.advance(), Err(Error::IndexOutOfBounds { index: 2, size: 2 }));
    Ok(())
}

#[test]
fn indices_agree_with_direct_computation() -> Result<()> {
    let mut a_layout = Layout::from_shape(&[5, 4], 1);
    a_layout.narrow(0, 1, 3)?;
    a_layout.flip(1)?;
    let a = Recorded::zeros(&[5, 4]).with_layout(a_layout.clone());
    let b = Recorded::zeros(&[2, 3, 1]);
    let mut iter = BroadcastIterator::new(&a, &b)?;

    assert_eq!(iter.shape(), &[2, 3, 4]);
    while iter.advance()? {
        let pos = iter.current_position().to_vec();
        assert_eq!(iter.a_index(), naive_index(&a_layout, &[2, 3, 4], &pos));
        assert_eq!(iter.b_index(), naive_index(b.layout(), &[2, 3, 4], &pos));
    }
    assert_eq!(iter.indices().len(), 24);
    Ok(())
}
