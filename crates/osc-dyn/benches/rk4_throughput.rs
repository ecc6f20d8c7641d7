use criterion::{black_box, criterion_group, criterion_main, Criterion};
use osc_core::{PhysicalParameters, State};
use osc_dyn::{run, step};

fn bench_step(c: &mut Criterion) {
    let params = PhysicalParameters::new(1.0, 1.0, 0.5).unwrap();
    let state = State::new(0.1, 0.0, -0.1, 0.0);
    c.bench_function("rk4_step", |b| {
        b.iter(|| step(black_box(state), 0.0, black_box(0.01), &params))
    });
}

fn bench_run(c: &mut Criterion) {
    let params = PhysicalParameters::new(1.0, 1.0, 0.5).unwrap();
    let initial = State::new(0.1, 0.0, -0.1, 0.0);
    c.bench_function("run_1000_steps", |b| {
        b.iter(|| {
            let _ = run(&params, black_box(initial), 10.0, 0.01).unwrap();
        })
    });
}

criterion_group!(benches, bench_step, bench_run);
criterion_main!(benches);
