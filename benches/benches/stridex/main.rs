mod iteration;

use criterion::criterion_main;

criterion_main!(iteration::benches);
