use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
};


// Group Benchmarks
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
    crate::skiplist::insert,
    crate::skiplist::contains,
    crate::skiplist::remove,
    crate::skiplist::iter,
);

// Benchmarks
criterion_main!(benches);
