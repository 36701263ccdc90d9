//! Benchmarks for tag parsing and record validation
//!
//! Tests performance of:
//! - Parsing tags of increasing size
//! - Evaluating scalars and sequences
//! - Validating a derived record end to end

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use structval::{FieldKind, FieldValue, LengthMode, Options, Record, evaluate, validate};

// ============================================================================
// PARSING
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for tag in ["min:1", "min:1; max:100", "min:1; max:100; len:3; in:1,2,3,100"] {
        group.bench_with_input(BenchmarkId::new("integer", tag), tag, |b, tag| {
            b.iter(|| Options::parse(&FieldKind::Integer, black_box(tag)));
        });
    }

    let long_in = format!("in:{}", (0..64).map(|n| n.to_string()).collect::<Vec<_>>().join(","));
    group.bench_function("integer_in_64_items", |b| {
        b.iter(|| Options::parse(&FieldKind::Integer, black_box(&long_in)));
    });

    group.bench_function("malformed", |b| {
        b.iter(|| Options::parse(&FieldKind::String, black_box("min:1; max")));
    });

    group.finish();
}

// ============================================================================
// EVALUATION
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let kind = FieldKind::String;
    let options = Options::parse(&kind, "min:3; max:16; in:alpha,beta,gamma").unwrap_or_default();
    group.bench_function("string_success", |b| {
        b.iter(|| evaluate("F", &kind, black_box(&FieldValue::Str("beta")), &options, LengthMode::Bytes));
    });
    group.bench_function("string_failure", |b| {
        b.iter(|| evaluate("F", &kind, black_box(&FieldValue::Str("x")), &options, LengthMode::Bytes));
    });

    let kind = FieldKind::SequenceOfInteger;
    let options = Options::parse(&kind, "min:0; max:1000").unwrap_or_default();
    for size in [8_i128, 64, 512] {
        let value = FieldValue::Seq((0..size).map(FieldValue::Int).collect());
        group.bench_with_input(BenchmarkId::new("int_sequence", size), &value, |b, value| {
            b.iter(|| evaluate("F", &kind, black_box(value), &options, LengthMode::Bytes));
        });
    }

    group.finish();
}

// ============================================================================
// RECORDS
// ============================================================================

#[derive(Record)]
struct User {
    #[validate("len:36")]
    pub id: String,
    #[validate("min:18; max:50")]
    pub age: i32,
    #[validate("in:admin,stuff")]
    pub role: String,
    #[validate("len:11")]
    pub phones: Vec<String>,
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let valid = User {
        id: "f9d4e1b0-63a4-4b2e-8d6c-0a47b6e3c2aa".into(),
        age: 30,
        role: "admin".into(),
        phones: vec!["79991234567".into(), "79997654321".into()],
    };
    group.bench_function("record_valid", |b| b.iter(|| validate(black_box(&valid))));

    let invalid = User {
        id: "short".into(),
        age: 7,
        role: "guest".into(),
        phones: vec!["123".into()],
    };
    group.bench_function("record_invalid", |b| b.iter(|| validate(black_box(&invalid))));

    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluate, bench_validate);
criterion_main!(benches);
