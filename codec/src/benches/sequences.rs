use crate::{bench_decode_generic, limit, put_varuint};
use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

const LENGTHS: [usize; 3] = [16, 1024, 65536];

fn bench_bytes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for len in LENGTHS {
        let mut input = Vec::with_capacity(len + 10);
        put_varuint(&mut input, len as u64);
        let start = input.len();
        input.resize(start + len, 0);
        rng.fill_bytes(&mut input[start..]);
        bench_decode_generic::<Vec<u8>>("sequences::u8", c, &(limit(), ()), &[input]);
    }
}

fn bench_u32(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for len in LENGTHS {
        let mut input = Vec::with_capacity(len * 4 + 10);
        put_varuint(&mut input, len as u64);
        for _ in 0..len {
            input.extend_from_slice(&rng.gen::<u32>().to_le_bytes());
        }
        bench_decode_generic::<Vec<u32>>("sequences::u32", c, &(limit(), ()), &[input]);
    }
}

fn bench_strings(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for len in LENGTHS {
        let mut input = Vec::new();
        put_varuint(&mut input, len as u64);
        for _ in 0..len {
            let word: String = (0..rng.gen_range(0..32))
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect();
            put_varuint(&mut input, word.len() as u64);
            input.extend_from_slice(word.as_bytes());
        }
        bench_decode_generic::<Vec<String>>("sequences::string", c, &(limit(), limit()), &[input]);
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_bytes, bench_u32, bench_strings
}
