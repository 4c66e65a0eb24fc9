use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_tristate::{from_str, to_string, JsonAdapter, NullTokens, QueryAdapter, QueryParams, TriState};

#[derive(Serialize, Deserialize, Clone)]
struct UpdateUser {
    #[serde(default)]
    nickname: TriState<String>,
    #[serde(default)]
    age: TriState<u32>,
    #[serde(default)]
    email: TriState<String>,
    #[serde(default)]
    tags: TriState<Vec<String>>,
}

fn sample_update() -> UpdateUser {
    UpdateUser {
        nickname: TriState::Null,
        age: TriState::of(42),
        email: TriState::of("alice@example.com".to_string()),
        tags: TriState::of(vec!["admin".to_string(), "ops".to_string()]),
    }
}

fn benchmark_query_scalars(c: &mut Criterion) {
    let adapter = QueryAdapter::default();
    let params = QueryParams::parse("limit=50&active=true&cursor=nil&since=2024-03-04");

    c.bench_function("query_scalars", |b| {
        b.iter(|| {
            let params = black_box(&params);
            (
                adapter.scalar::<u32>(params, "limit"),
                adapter.scalar::<bool>(params, "active"),
                adapter.scalar::<String>(params, "cursor"),
                adapter.scalar::<chrono::NaiveDate>(params, "since"),
            )
        })
    });
}

fn benchmark_query_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_collection");
    let adapter = QueryAdapter::default();

    for size in [10, 50, 100, 500].iter() {
        let joined: Vec<String> = (0..*size).map(|i: u32| i.to_string()).collect();
        let joined = QueryParams::parse(&format!("ids={}", joined.join(",")));

        let repeated: QueryParams = (0..*size).map(|i: u32| ("ids", i.to_string())).collect();

        group.bench_with_input(BenchmarkId::new("joined", size), &joined, |b, params| {
            b.iter(|| adapter.list::<u64>(black_box(params), "ids"))
        });
        group.bench_with_input(BenchmarkId::new("repeated", size), &repeated, |b, params| {
            b.iter(|| adapter.list::<u64>(black_box(params), "ids"))
        });
    }
    group.finish();
}

fn benchmark_query_parse(c: &mut Criterion) {
    let query = "?ids=1,2,3&ids=4&name=Ada%20Lovelace&cursor=nil&tags=a&tags=b&tags=c";

    c.bench_function("query_parse", |b| {
        b.iter(|| QueryParams::parse(black_box(query)))
    });
}

fn benchmark_json_deserialize(c: &mut Criterion) {
    let json = to_string(&sample_update()).unwrap();
    let custom = JsonAdapter::with_null_tokens(NullTokens::new(["undefined", "none"]));

    let mut group = c.benchmark_group("json_deserialize");
    group.bench_function("default_tokens", |b| {
        b.iter(|| from_str::<UpdateUser>(black_box(&json)))
    });
    group.bench_function("adapter_tokens", |b| {
        b.iter(|| custom.from_str::<UpdateUser>(black_box(&json)))
    });
    group.bench_function("plain_serde_json", |b| {
        b.iter(|| serde_json::from_str::<UpdateUser>(black_box(&json)))
    });
    group.finish();
}

fn benchmark_json_serialize(c: &mut Criterion) {
    let update = sample_update();

    c.bench_function("json_serialize", |b| {
        b.iter(|| to_string(black_box(&update)))
    });
}

criterion_group!(
    benches,
    benchmark_query_scalars,
    benchmark_query_collection,
    benchmark_query_parse,
    benchmark_json_deserialize,
    benchmark_json_serialize
);
criterion_main!(benches);
