use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trie_suggest::wordlist::trie::Trie;


fn dictionary(size: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| {
        let len = rng.gen_range(3..12);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = dictionary(200_000);
    let trie = Trie::build(words.iter().map(|x| x.as_str()));

    c.bench_function("distance 1", |b| b.iter(|| trie.search("plastic", 1)));

    { let mut group = c.benchmark_group("10s");
        group.sample_size(10);
        group.bench_function("distance 3", |b| b.iter(|| trie.search("a_cover_plastia", 3)));
        group.bench_function("distance 3 (multithreaded)", |b| b.iter(|| trie.search_multithreaded("a_cover_plastia", 3)));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
