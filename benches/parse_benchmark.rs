use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csvline::{CsvParser, CsvReader, QuoteMode};

fn sample_line(fields: usize) -> String {
    (0..fields)
        .map(|i| {
            if i % 3 == 0 {
                format!("\"value {} \"\"quoted\"\", with comma\"", i)
            } else {
                format!("plain_{}", i)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn benchmark_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    for fields in [4, 32, 256].iter() {
        let line = sample_line(*fields);
        let escaping = CsvParser::default();
        let no_escape = CsvParser::default().with_mode(QuoteMode::NoEscape);

        group.bench_with_input(BenchmarkId::new("escaping", fields), &line, |b, line| {
            b.iter(|| black_box(escaping.parse_line(line)));
        });
        group.bench_with_input(BenchmarkId::new("no_escape", fields), &line, |b, line| {
            b.iter(|| black_box(no_escape.parse_line(line)));
        });
    }

    group.finish();
}

fn benchmark_read_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_table");

    for rows in [1000, 10000].iter() {
        let mut data = String::new();
        for _ in 0..*rows {
            data.push_str(&sample_line(8));
            data.push('\n');
        }

        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| {
                let table = CsvReader::from_reader(data.as_bytes())
                    .uniform_width(true)
                    .read_table()
                    .unwrap();
                black_box(table);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_line, benchmark_read_table);
criterion_main!(benches);
