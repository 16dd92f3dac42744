use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sp_bundler::{comments, rename, spaces};

fn synthetic_source(lines: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::new();
    for i in 0..lines {
        match rng.gen_range(0..4) {
            0 => text.push_str(&format!("int veryLongIdentifierNumber{i} = {i}; // trailing note\n")),
            1 => text.push_str("/* block\n   comment */\n"),
            2 => text.push_str(&format!("call(veryLongIdentifierNumber{},    {});\n", i % 50, i)),
            _ => text.push_str("x    =    x   +   1;\n"),
        }
    }
    text
}

fn bench_comments(c: &mut Criterion) {
    let text = synthetic_source(2000);
    c.bench_function("comments_strip_2k_lines", |b| {
        b.iter(|| comments::strip(black_box(&text)))
    });
}

fn bench_spaces(c: &mut Criterion) {
    let text = synthetic_source(2000);
    c.bench_function("spaces_compact_2k_lines", |b| {
        b.iter(|| spaces::compact(black_box(&text)))
    });
}

fn bench_shrink(c: &mut Criterion) {
    let text = synthetic_source(2000);
    let list: Vec<String> = (0..50).map(|i| format!("veryLongIdentifierNumber{i}")).collect();
    let joined = list.join(" ");
    let keywords = rename::parse_keywords(&joined);
    c.bench_function("rename_shrink_50_keywords", |b| {
        b.iter(|| rename::shrink(black_box(&text), black_box(&keywords)))
    });
}

criterion_group!(benches, bench_comments, bench_spaces, bench_shrink);
criterion_main!(benches);
