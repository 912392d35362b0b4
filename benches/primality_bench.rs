use criterion::{black_box, criterion_group, criterion_main, Criterion};
use longhand::{primality, BigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_miller_rabin(c: &mut Criterion) {
    // 2^89 - 1, a 27-digit Mersenne prime
    let prime: BigInt = "618970019642690137449562111".parse().unwrap();
    c.bench_function("miller_rabin(M89, 5)", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            primality::miller_rabin(black_box(&prime), black_box(5), &mut rng)
        });
    });
}

fn bench_solovay_strassen(c: &mut Criterion) {
    let prime: BigInt = "618970019642690137449562111".parse().unwrap();
    c.bench_function("solovay_strassen(M89, 5)", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            primality::solovay_strassen(black_box(&prime), black_box(5), &mut rng)
        });
    });
}

fn bench_composite_rejection(c: &mut Criterion) {
    // 561 = 3 * 11 * 17, the smallest Carmichael number
    let carmichael = BigInt::from(561u32);
    c.bench_function("miller_rabin(561, 5)", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            primality::miller_rabin(black_box(&carmichael), black_box(5), &mut rng)
        });
    });
}

fn bench_lucas_lehmer(c: &mut Criterion) {
    c.bench_function("lucas_lehmer(127)", |b| {
        b.iter(|| primality::lucas_lehmer(black_box(127)));
    });
    c.bench_function("lucas_lehmer(521)", |b| {
        b.iter(|| primality::lucas_lehmer(black_box(521)));
    });
}

criterion_group!(
    benches,
    bench_miller_rabin,
    bench_solovay_strassen,
    bench_composite_rejection,
    bench_lucas_lehmer
);
criterion_main!(benches);
