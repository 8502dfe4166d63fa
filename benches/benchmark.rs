//! Benchmarks for the rotor cipher engine.
//!
//! Measures single-keystroke latency, whole-message throughput, and how
//! throughput scales with the depth of the rotor stack.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_machine::{EnigmaMachine, Plugboard, Reflector, Rotor};

/// Plaintext used consistently across message benchmarks.
const BENCH_MESSAGE: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGANDKEEPSRUNNINGINTOTHENIGHT";

/// Cyclic rotor names used to build stacks of arbitrary depth.
const ROTOR_NAMES: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

fn machine_with_depth(depth: usize) -> EnigmaMachine {
    let rotors: Vec<Rotor> = (0..depth)
        .map(|i| Rotor::preset(ROTOR_NAMES[i % ROTOR_NAMES.len()]).unwrap())
        .collect();
    EnigmaMachine::new(
        Plugboard::from_pairs("AM FI NV PS TU WZ").unwrap(),
        rotors,
        Reflector::preset("B").unwrap(),
    )
}

/// Benchmarks `press_key()` on a three-rotor machine.
///
/// The machine is never re-keyed, so the rotors keep stepping across
/// iterations the way they do over a long message.
fn bench_press_key(c: &mut Criterion) {
    let mut machine = machine_with_depth(3);
    c.bench_function("press_key", |b| {
        b.iter(|| machine.press_key(black_box('A')));
    });
}

/// Benchmarks `encrypt_or_decrypt()` over a fixed message, re-keying first.
fn bench_message(c: &mut Criterion) {
    let mut machine = machine_with_depth(3);

    let mut group = c.benchmark_group("message");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    group.bench_function("encrypt_or_decrypt", |b| {
        b.iter(|| {
            machine.set_positions(&[0, 0, 0]).unwrap();
            machine.encrypt_or_decrypt(black_box(BENCH_MESSAGE))
        });
    });

    group.bench_function("forward_only", |b| {
        b.iter(|| {
            machine.set_positions(&[0, 0, 0]).unwrap();
            machine.forward_only(black_box(BENCH_MESSAGE))
        });
    });

    group.finish();
}

/// Benchmarks message throughput for stacks of 1, 3, 5 and 8 rotors.
fn bench_stack_depth(c: &mut Criterion) {
    let depths: &[usize] = &[1, 3, 5, 8];

    let mut group = c.benchmark_group("stack_depth");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for &depth in depths {
        let mut machine = machine_with_depth(depth);
        let start = vec![0u8; depth];

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                machine.set_positions(&start).unwrap();
                machine.encrypt_or_decrypt(black_box(BENCH_MESSAGE))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_press_key, bench_message, bench_stack_depth);
criterion_main!(benches);
