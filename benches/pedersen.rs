use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ec_vrfs::pedersen::{Prover, Verifier};
use ec_vrfs::suites::bandersnatch::edwards::*;

fn make_input() -> Input {
    Input::new(b"bench input data").unwrap()
}

fn make_secret() -> Secret {
    Secret::from_seed(b"bench secret seed")
}

fn bench_pedersen_prove(c: &mut Criterion) {
    let secret = make_secret();
    let input = make_input();
    let output = secret.output(input);

    c.bench_function("bandersnatch/pedersen_prove", |b| {
        b.iter(|| secret.prove(black_box(input), black_box(output), b"ad"));
    });
}

fn bench_pedersen_verify(c: &mut Criterion) {
    let secret = make_secret();
    let input = make_input();
    let output = secret.output(input);
    let (proof, _) = secret.prove(input, output, b"ad");

    c.bench_function("bandersnatch/pedersen_verify", |b| {
        b.iter(|| {
            Public::verify(
                black_box(input),
                black_box(output),
                b"ad",
                black_box(&proof),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_pedersen_prove, bench_pedersen_verify);
criterion_main!(benches);
