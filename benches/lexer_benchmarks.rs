//! Performance benchmarks for the sbasic lexer.
//!
//! - Size-based: the same procedure repeated to reach different file sizes
//! - Feature-specific: operator-heavy, string-heavy and comment-heavy input

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sbasic::prelude::*;
use std::hint::black_box;

const PROCEDURE: &str = "\
Procedure Accumulate(Total, Count)
    For I = 1 In Count Step 1
        If I Mod 2 = 0 Then
            Total = Total + I ** 2 ; even squares
        ElseIf I >= 10 Then
            Total = (Total << 1) Xor I
        Else
            Print \"odd: \\\"\" + I
        EndIf
    Next
    ProcedureReturn Total
EndProcedure
";

fn count_tokens(source: &[u8]) -> usize {
    Lexer::new(source).count()
}

/// Benchmark lexing throughput across different file sizes
fn size_based_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/file_sizes");

    for repeats in [1, 10, 100, 1000] {
        let source = PROCEDURE.repeat(repeats);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(repeats * PROCEDURE.lines().count()),
            source.as_bytes(),
            |b, source| b.iter(|| count_tokens(black_box(source))),
        );
    }

    group.finish();
}

/// Benchmark specific token families
fn feature_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/features");

    let operators = "A ** B <> C <= D >= E << F >> G | H & I ^ J\n".repeat(500);
    let strings = "Print \"escaped \\\"quote\\\" inside\" + \"plain\"\n".repeat(500);
    let comments = "; a comment line explaining nothing in particular\nX = 1\n".repeat(500);

    for (name, source) in [
        ("operators", &operators),
        ("strings", &strings),
        ("comments", &comments),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| count_tokens(black_box(source.as_bytes())))
        });
    }

    group.finish();
}

/// Benchmark keyword resolution against identifiers of the same lengths
fn keyword_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/keywords");

    let keywords = "Procedure EndProcedure If ElseIf Else EndIf Then For In Next Step\n".repeat(500);
    let identifiers = "Abcdefghi Abcdefghijkl Ab Abcdef Abcd Abcde Abcd Abc Ab Abcd Abcd\n".repeat(500);

    group.bench_function("keywords", |b| {
        b.iter(|| count_tokens(black_box(keywords.as_bytes())))
    });
    group.bench_function("identifiers", |b| {
        b.iter(|| count_tokens(black_box(identifiers.as_bytes())))
    });

    group.finish();
}

criterion_group!(
    benches,
    size_based_benchmarks,
    feature_benchmarks,
    keyword_benchmarks
);
criterion_main!(benches);
