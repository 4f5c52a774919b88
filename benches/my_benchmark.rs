use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zipf_analyzer::{
    analyze_text_with_custom_config, analyze_word_counts_with_custom_config, SourceInfo,
    WordCount, DEFAULT_ZIPF_ANALYZER_CONFIG,
};

fn benchmark_analyze_text_long(c: &mut Criterion) {
    let text = "E-commerce giant Amazon joined the blue-chip index, replacing drugstore operator \
        Walgreens Boots Alliance. The reshuffle reflects the ongoing shift in economic power from \
        traditional brick-and-mortar retail to e-commerce and technology-driven companies. The \
        inclusion of Amazon in the index marks a significant milestone in the recognition of the \
        e-commerce giant's influence and its role in the broader market. It signals a broader \
        recognition of the value and impact of technology and e-commerce sectors, encouraging \
        investors to perhaps rethink their investment approaches in light of these trends.";

    c.bench_function("analyze_text_long", |b| {
        b.iter(|| {
            analyze_text_with_custom_config(
                black_box(DEFAULT_ZIPF_ANALYZER_CONFIG),
                "bench",
                SourceInfo::default(),
                black_box(text),
            )
            .expect("Analysis failed");
        })
    });
}

fn benchmark_analyze_word_counts_large(c: &mut Criterion) {
    let word_counts: Vec<WordCount> = (1..=10_000)
        .map(|rank| WordCount::new(format!("word{}", rank), 1_000_000 / rank))
        .collect();

    c.bench_function("analyze_word_counts_large", |b| {
        b.iter(|| {
            analyze_word_counts_with_custom_config(
                black_box(DEFAULT_ZIPF_ANALYZER_CONFIG),
                "bench",
                SourceInfo::default(),
                black_box(word_counts.clone()),
            )
            .expect("Analysis failed");
        })
    });
}

criterion_group!(
    benches,
    benchmark_analyze_text_long,
    benchmark_analyze_word_counts_large
);
criterion_main!(benches);
