use binwire_codec::{Decode, RangeCfg};
use criterion::{criterion_main, BatchSize, Criterion};

mod sequences;

/// Benchmarks decoding a batch of pre-encoded inputs of type `T`.
pub(crate) fn bench_decode_generic<T: Decode>(
    name: &str,
    c: &mut Criterion,
    cfg: &T::Cfg,
    inputs: &[Vec<u8>],
) {
    let total: usize = inputs.iter().map(Vec::len).sum();
    c.bench_function(&format!("{name}/inputs={} bytes={total}", inputs.len()), |b| {
        b.iter_batched(
            || inputs.to_vec(),
            |inputs| {
                for input in inputs {
                    T::decode_cfg(input.as_slice(), cfg).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Encodes `len` as a varuint.
pub(crate) fn put_varuint(out: &mut Vec<u8>, mut len: u64) {
    while len >= 0x80 {
        out.push((len as u8) | 0x80);
        len >>= 7;
    }
    out.push(len as u8);
}

/// Length limit applied to every benchmarked sequence.
pub(crate) fn limit() -> RangeCfg<usize> {
    RangeCfg::new(..=1 << 20)
}

criterion_main!(sequences::benches, aggregates::benches);
