use criterion::{black_box, criterion_group, Criterion};
use stridex_array::Array;
use stridex_broadcast::{BroadcastIndexIterator, IndexIterator, OutputSpec};
use stridex_core::layout::Layout;

// Constants for benchmark data sizes
const SIZES: [(usize, &str); 3] = [(16, "small"), (128, "medium"), (512, "large")];

fn index_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("broadcast/indices");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for (size, name) in SIZES {
        let a = Layout::from_shape(&[size, 1], 1);
        let b = Layout::from_shape(&[size], 1);
        let out = Layout::from_shape(&[size, size], 1);

        group.bench_function(format!("outer/{}", name), |bencher| {
            let mut iter = BroadcastIndexIterator::new(&a, &b, OutputSpec::Distinct(&out)).unwrap();
            bencher.iter(|| {
                iter.reset();
                let mut acc = 0usize;
                while iter.advance() {
                    acc = acc.wrapping_add(iter.a_index() ^ iter.b_index());
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn binary_ops(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("broadcast/binary");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for (size, name) in SIZES {
        let x_data: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let x = Array::new(&x_data, &[size, 1]).unwrap();
        let y = Array::new(&x_data, &[size]).unwrap();

        group.bench_function(format!("add/{}", name), |bencher| bencher.iter(|| black_box(x.add(&y).unwrap())));

        let mut z = Array::zeros(&[size, size]).unwrap();
        group.bench_function(format!("add_/{}", name), |bencher| bencher.iter(|| z.add_(&y).unwrap()));
    }

    group.finish();
}

criterion_group!(benches, index_traversal, binary_ops);
