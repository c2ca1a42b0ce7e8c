use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kanjou::{
    AspectTag, EncoderConfig, FeatureEncoder, NO_POLARITY, Result, Split, SubwordTokenizer,
    TaggedRecord, build_examples,
};

/// Deterministic stand-in for a WordPiece tokenizer: one unit per four
/// characters, continuations prefixed with `##`.
struct ChunkTokenizer;

impl SubwordTokenizer for ChunkTokenizer {
    fn tokenize(&self, word: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();
        Ok(chars
            .chunks(4)
            .enumerate()
            .map(|(i, chunk)| {
                let piece: String = chunk.iter().collect();
                if i == 0 { piece } else { format!("##{}", piece) }
            })
            .collect())
    }

    fn convert_tokens_to_ids(&self, tokens: &[String]) -> Result<Vec<u32>> {
        Ok(tokens
            .iter()
            .map(|token| token.bytes().map(u32::from).sum::<u32>() + 1)
            .collect())
    }
}

fn review_records() -> Vec<TaggedRecord> {
    let sentences: &[&[(&str, AspectTag, i32)]] = &[
        &[
            ("the", AspectTag::Outside, NO_POLARITY),
            ("battery", AspectTag::BeginAspect, 2),
            ("life", AspectTag::InsideAspect, 2),
            ("is", AspectTag::Outside, NO_POLARITY),
            ("outstanding", AspectTag::Outside, NO_POLARITY),
        ],
        &[
            ("keyboard", AspectTag::BeginAspect, 0),
            ("feels", AspectTag::Outside, NO_POLARITY),
            ("mushy", AspectTag::Outside, NO_POLARITY),
            ("but", AspectTag::Outside, NO_POLARITY),
            ("the", AspectTag::Outside, NO_POLARITY),
            ("screen", AspectTag::BeginAspect, 2),
            ("is", AspectTag::Outside, NO_POLARITY),
            ("gorgeous", AspectTag::Outside, NO_POLARITY),
        ],
        &[
            ("arrived", AspectTag::Outside, NO_POLARITY),
            ("two", AspectTag::Outside, NO_POLARITY),
            ("days", AspectTag::Outside, NO_POLARITY),
            ("late", AspectTag::Outside, NO_POLARITY),
        ],
    ];

    sentences
        .iter()
        .map(|tokens| {
            TaggedRecord::new(
                tokens.iter().map(|(w, _, _)| w.to_string()).collect(),
                tokens.iter().map(|(_, t, _)| *t).collect(),
                tokens.iter().map(|(_, _, p)| *p).collect(),
            )
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let examples = build_examples(&review_records(), Split::Train);
    let encoder = FeatureEncoder::new(
        ChunkTokenizer,
        EncoderConfig::new().with_max_seq_length(128),
    );

    c.bench_function("encode_single", |b| {
        b.iter(|| encoder.encode(black_box(&examples[0])).unwrap());
    });

    c.bench_function("encode_batch_3", |b| {
        b.iter(|| encoder.encode_batch(black_box(&examples)).unwrap());
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
