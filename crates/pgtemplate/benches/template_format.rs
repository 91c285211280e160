use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgtemplate::{Args, Template};

/// Template with `n` named identifier placeholders and `n` positional literals:
/// SELECT {c0@I}, {c1@I}, ... FROM {tbl@Q} WHERE {c0@I} = {@L} AND ...
fn build_template(n: usize) -> (Template, Args) {
    let mut src = String::from("SELECT ");
    let mut args = Args::new().named("tbl", "public.t");
    for i in 0..n {
        if i > 0 {
            src.push_str(", ");
        }
        src.push_str(&format!("{{c{i}@I}}"));
        args.insert(format!("c{i}"), format!("col{i}"));
    }
    src.push_str(" FROM {tbl@Q} WHERE ");
    for i in 0..n {
        if i > 0 {
            src.push_str(" AND ");
        }
        src.push_str(&format!("{{c{i}@I}} = {{@L}}"));
        args.push(i as i64);
    }
    (Template::new(src), args)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/parse");

    for n in [1, 10, 100] {
        let (t, _) = build_template(n);
        let src = t.source().to_string();
        group.bench_with_input(BenchmarkId::from_parameter(n), &src, |b, src| {
            b.iter(|| black_box(Template::new(src.as_str())));
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/format");

    for n in [1, 10, 100] {
        let (t, args) = build_template(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(t, args), |b, (t, args)| {
            b.iter(|| black_box(t.format(args).unwrap()));
        });
    }

    group.finish();
}

fn bench_format_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/format_and_render");

    for n in [1, 10, 100] {
        let (t, args) = build_template(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(t, args), |b, (t, args)| {
            b.iter(|| black_box(t.format(args).unwrap().to_sql()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format, bench_format_and_render);
criterion_main!(benches);
