//! Benchmarks for statevector simulation
//!
//! Run with: cargo bench -p tesseract-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tesseract_ir::Circuit;
use tesseract_sim::Statevector;

/// Benchmark a full GHZ circuit replay at increasing widths
fn bench_ghz_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_replay");

    for num_qubits in &[4u32, 8, 12, 16] {
        let circuit = Circuit::ghz(*num_qubits).unwrap();
        let instructions: Vec<_> = circuit.ops().cloned().collect();

        group.bench_with_input(
            BenchmarkId::new("replay", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut sv = Statevector::new(n as usize);
                    for inst in &instructions {
                        sv.apply(black_box(inst));
                    }
                    black_box(sv.sample())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the Grover search circuit (fixed 2 qubits)
fn bench_grover_replay(c: &mut Criterion) {
    let circuit = Circuit::grover("11").unwrap();
    let instructions: Vec<_> = circuit.ops().cloned().collect();

    c.bench_function("grover_replay", |b| {
        b.iter(|| {
            let mut sv = Statevector::new(2);
            for inst in &instructions {
                sv.apply(black_box(inst));
            }
            black_box(sv.sample())
        });
    });
}

criterion_group!(benches, bench_ghz_replay, bench_grover_replay);
criterion_main!(benches);
