//! Simulator benchmark.
//!
//! Target: keep gate application well under 50ms for chains up to ~16 qubits.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use ttn_core::Gate;
use ttn_sim::QCircuit;
use ttn_topology::{make_chain, make_ibmq_topology};

fn zero_amplitudes(n: usize) -> Vec<(Complex64, Complex64)> {
    vec![(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)); n]
}

fn random_circuit(qc: &mut QCircuit, num_gates: usize) {
    let n = qc.num_qubits();
    for i in 0..num_gates {
        match i % 3 {
            0 => qc.apply(Gate::h(i % n)).unwrap(),
            1 => qc.apply(Gate::x(i % n)).unwrap(),
            _ if n > 1 => qc.apply(Gate::cnot(i % n, (i + 1) % n)).unwrap(),
            _ => qc.apply(Gate::x(i % n)).unwrap(),
        }
    }
}

fn bench_single_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");

    for num_qubits in [4, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("H_gate", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut qc = QCircuit::new(make_chain(n, false), &zero_amplitudes(n)).unwrap();
                b.iter(|| qc.apply(Gate::h(0)).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_two_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_gate");

    for num_qubits in [4, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("CNOT_adjacent", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut qc = QCircuit::new(make_chain(n, false), &zero_amplitudes(n)).unwrap();
                b.iter(|| qc.apply(Gate::cnot(0, 1)).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_far_cnot_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("far_cnot_routing");

    for num_qubits in [4, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("CNOT_far", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut qc = QCircuit::new(make_chain(n, false), &zero_amplitudes(n)).unwrap();
                b.iter(|| qc.apply(Gate::cnot(0, n - 1)).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_execute_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_circuit");

    for num_qubits in [4, 8, 12] {
        group.bench_with_input(
            BenchmarkId::new("qubits", num_qubits),
            &num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut qc =
                        QCircuit::new(make_chain(n, false), &zero_amplitudes(n)).unwrap();
                    random_circuit(&mut qc, 20);
                })
            },
        );
    }

    group.finish();
}

fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");

    for num_qubits in [4, 8, 12] {
        group.bench_with_input(
            BenchmarkId::new("probability_of_zero", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut qc = QCircuit::new(make_chain(n, false), &zero_amplitudes(n)).unwrap();
                for i in 0..n {
                    qc.apply(Gate::h(i)).unwrap();
                }
                b.iter(|| qc.probability_of_zero(0).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_bell_pair(c: &mut Criterion) {
    c.bench_function("prepare_bell_pair", |b| {
        b.iter(|| {
            let mut qc = QCircuit::new(make_chain(2, false), &zero_amplitudes(2)).unwrap();
            qc.apply(Gate::h(0)).unwrap();
            qc.apply(Gate::cnot(0, 1)).unwrap();
        })
    });
}

fn bench_ghz_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_chain");

    for num_qubits in [4, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("qubits", num_qubits),
            &num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut qc =
                        QCircuit::new(make_chain(n, false), &zero_amplitudes(n)).unwrap();
                    qc.apply(Gate::h(0)).unwrap();
                    for i in 0..n - 1 {
                        qc.apply(Gate::cnot(i, i + 1)).unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_ibmq_topology_workload(c: &mut Criterion) {
    c.bench_function("ibmq_53q_ghz_chain_segment", |b| {
        b.iter(|| {
            let topology = make_ibmq_topology();
            let n = topology.num_bits();
            let mut qc = QCircuit::new(topology, &zero_amplitudes(n)).unwrap();
            qc.apply(Gate::h(0)).unwrap();
            qc.apply(Gate::cnot(0, 1)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_single_qubit_gate,
    bench_two_qubit_gate,
    bench_far_cnot_routing,
    bench_execute_circuit,
    bench_measurement,
    bench_bell_pair,
    bench_ghz_chain,
    bench_ibmq_topology_workload,
);
criterion_main!(benches);
