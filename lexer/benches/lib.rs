#[macro_use]
extern crate criterion;

use criterion::Criterion;
use lexer::buffer::TokenBuffer;
use lexer::Lexer;
use std::iter::repeat;

fn bench_tokenizing(b: &mut Criterion) {
    b.bench_function("tokenize_rule", |b| {
        b.iter(|| {
            let input = "<expr> ::= <expr> + <term> | <expr> - <term> | <term>";
            let input = TokenBuffer::new(input.as_bytes()).unwrap();
            Lexer::new(input).count()
        })
    });
    b.bench_function("tokenize_grammar_file", |b| {
        let rule = "# arithmetic\n<term> ::= <term> * <factor> | <factor>\n";
        let input: String = repeat(rule).take(500).collect();
        b.iter(|| {
            let buffer = TokenBuffer::new(input.as_bytes()).unwrap();
            Lexer::new(buffer).count()
        })
    });
}

criterion_group!(benches, bench_tokenizing);
criterion_main!(benches);
