//! Integration tests for batch scoring against an in-memory provider

use core::time::Duration;
use modelrank_lib::facts::{Artifact, FetchError, ModelMetadata, RepoFile, StaticProvider};
use modelrank_lib::metrics::{HardwareTarget, HardwareTargets, MetricName, Registry};
use modelrank_lib::scoring::{MetricDefinition, Orchestrator, ScoreRecord};
use std::sync::Arc;
use strum::IntoEnumIterator;

fn hardware_targets() -> HardwareTargets {
    let target = |name: &str, capacity_gb: f64, default_score: f64| HardwareTarget {
        name: name.into(),
        capacity_gb,
        default_score,
    };

    HardwareTargets::new(vec![
        target("raspberry_pi", 1.0, 0.0),
        target("jetson_nano", 4.0, 0.0),
        target("desktop_pc", 16.0, 0.5),
        target("aws_server", 64.0, 1.0),
    ])
    .unwrap()
}

fn weight(metric: MetricName) -> f64 {
    match metric {
        MetricName::PerformanceClaims => 0.2,
        MetricName::RampUpTime | MetricName::BusFactor => 0.15,
        _ => 0.1,
    }
}

fn definitions() -> Vec<MetricDefinition> {
    MetricName::iter().map(|m| MetricDefinition::new(m, weight(m)).unwrap()).collect()
}

fn orchestrator(provider: StaticProvider, concurrency: usize, metric_timeout: Duration) -> Orchestrator {
    let registry = Registry::standard(&hardware_targets()).unwrap();
    Orchestrator::new(registry, definitions(), Arc::new(provider), concurrency, metric_timeout).unwrap()
}

fn rich_metadata(seed: u64) -> ModelMetadata {
    ModelMetadata {
        downloads: Some(10_000 * seed),
        likes: Some(50 * seed),
        last_modified: Some("2025-01-15T08:00:00.000Z".into()),
        author: Some(format!("author-{seed}")),
        license: Some("apache-2.0".into()),
        datasets: vec!["squad".into()],
        tags: vec!["pytorch".into(), "dataset:glue".into()],
        has_eval_results: seed % 2 == 0,
        files: vec![
            RepoFile::with_size("README.md", 4096),
            RepoFile::with_size("config.json", 700),
            RepoFile::with_size("model.safetensors", 250_000_000 * seed),
            RepoFile::new("examples/train.py"),
        ],
        used_storage: None,
    }
}

fn identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("org/model-{i}")).collect()
}

fn artifacts(identifiers: &[String]) -> Vec<Artifact> {
    identifiers.iter().map(Artifact::model).collect()
}

fn assert_well_formed(record: &ScoreRecord) {
    assert!((0.0..=1.0).contains(&record.net_score()), "{}: net score out of range", record.name());

    let metrics: Vec<_> = record.outcomes().iter().map(|o| o.metric()).collect();
    assert_eq!(metrics, MetricName::iter().collect::<Vec<_>>());

    for outcome in record.outcomes() {
        assert!((0.0..=1.0).contains(&outcome.score()), "{}: {} out of range", record.name(), outcome.metric());
        if !outcome.is_ok() {
            assert!(outcome.score().abs() < f64::EPSILON);
        }

        match outcome.targets() {
            Some(targets) => {
                assert_eq!(outcome.metric(), MetricName::SizeScore);
                assert_eq!(
                    targets.names().collect::<Vec<_>>(),
                    vec!["raspberry_pi", "jetson_nano", "desktop_pc", "aws_server"]
                );
                for (_, score) in targets.iter() {
                    assert!((0.0..=1.0).contains(&score));
                }
            }
            None => assert_ne!(outcome.metric(), MetricName::SizeScore),
        }
    }
}

fn expected_net_score(record: &ScoreRecord) -> f64 {
    let (weighted, total) = record
        .outcomes()
        .iter()
        .filter(|o| o.is_ok())
        .fold((0.0, 0.0), |(weighted, total), o| {
            (weighted + o.score() * weight(o.metric()), total + weight(o.metric()))
        });

    if total > 0.0 { weighted / total } else { 0.0 }
}

#[tokio::test]
async fn test_records_follow_input_order_under_varied_delays() {
    let ids = identifiers(12);
    let mut provider = StaticProvider::new();
    for (i, id) in ids.iter().enumerate() {
        let seed = u64::try_from(i).unwrap() + 1;
        provider = provider.with_model(id.clone(), rich_metadata(seed)).with_delay(id, Duration::from_millis((seed * 37) % 60));
    }

    let orchestrator = orchestrator(provider, 4, Duration::from_secs(10));
    let records = orchestrator.score_all(artifacts(&ids)).await.unwrap();

    let names: Vec<_> = records.iter().map(ScoreRecord::name).collect();
    assert_eq!(names, ids.iter().map(String::as_str).collect::<Vec<_>>());

    for record in &records {
        assert_well_formed(record);
        assert!(record.outcomes().iter().all(|o| o.is_ok()));
        assert!((record.net_score() - expected_net_score(record)).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_one_record_per_model_including_duplicates() {
    let provider = StaticProvider::new().with_model("org/model", rich_metadata(1));
    let orchestrator = orchestrator(provider, 2, Duration::from_secs(10));

    let batch = vec![Artifact::model("org/model"); 3];
    let mut emitted = Vec::new();
    let summary = orchestrator
        .score_batch(batch, |record| {
            emitted.push(record);
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(summary.scored, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(emitted.len(), 3);
    assert!(emitted.iter().all(|r| r.name() == "org/model"));
}

#[tokio::test]
async fn test_failures_stay_with_their_model() {
    let ids = identifiers(4);
    let provider = StaticProvider::new()
        .with_model(ids[0].clone(), rich_metadata(1))
        .with_error(ids[1].clone(), FetchError::NotFound)
        .with_model(ids[2].clone(), rich_metadata(2))
        .with_error(ids[3].clone(), FetchError::network("connection reset"));

    let orchestrator = orchestrator(provider, 3, Duration::from_secs(10));
    let records = orchestrator.score_all(artifacts(&ids)).await.unwrap();
    assert_eq!(records.len(), 4);

    for (index, record) in records.iter().enumerate() {
        assert_well_formed(record);

        if index % 2 == 0 {
            assert!(record.outcomes().iter().all(|o| o.is_ok()), "{} should have succeeded", record.name());
            assert!(record.net_score() > 0.0);
        } else {
            assert!(record.outcomes().iter().all(|o| !o.is_ok()), "{} should have failed", record.name());
            assert!(record.net_score().abs() < f64::EPSILON);

            let size = record.outcome(MetricName::SizeScore).unwrap().targets().unwrap();
            assert_eq!(size.get("aws_server"), Some(1.0));
            assert_eq!(size.get("raspberry_pi"), Some(0.0));
        }
    }
}

#[tokio::test]
async fn test_metrics_of_a_model_share_one_fetch() {
    let ids = identifiers(5);
    let provider = ids
        .iter()
        .fold(StaticProvider::new(), |provider, id| provider.with_model(id.clone(), rich_metadata(1)));
    let provider = Arc::new(provider);

    let registry = Registry::standard(&hardware_targets()).unwrap();
    let orchestrator = Orchestrator::new(registry, definitions(), Arc::clone(&provider) as _, 4, Duration::from_secs(10)).unwrap();
    let _ = orchestrator.score_all(artifacts(&ids)).await.unwrap();

    for id in &ids {
        assert_eq!(provider.fetch_count(id), 1, "{id} should be fetched once");
    }
    assert_eq!(provider.total_fetches(), ids.len());
}

#[tokio::test]
async fn test_slow_model_times_out_without_affecting_others() {
    let provider = StaticProvider::new()
        .with_model("org/fast", rich_metadata(1))
        .with_model("org/slow", rich_metadata(2))
        .with_delay("org/slow", Duration::from_secs(5))
        .with_model("org/also-fast", rich_metadata(3));

    let orchestrator = orchestrator(provider, 8, Duration::from_millis(200));
    let records = orchestrator
        .score_all(vec![
            Artifact::model("org/fast"),
            Artifact::model("org/slow"),
            Artifact::model("org/also-fast"),
        ])
        .await
        .unwrap();

    assert!(records[0].outcomes().iter().all(|o| o.is_ok()));
    assert!(records[2].outcomes().iter().all(|o| o.is_ok()));

    let slow = &records[1];
    assert_well_formed(slow);
    assert!(slow.net_score().abs() < f64::EPSILON);
    for outcome in slow.outcomes() {
        assert!(!outcome.is_ok());
        assert!((200..1000).contains(&outcome.latency_ms()), "latency {}", outcome.latency_ms());
    }
}

#[tokio::test]
async fn test_rate_limited_model_does_not_hold_back_the_batch() {
    let provider = StaticProvider::new()
        .with_error(
            "org/limited",
            FetchError::RateLimited {
                retry_after: Some(Duration::from_secs(3600)),
            },
        )
        .with_model("org/second", rich_metadata(1))
        .with_model("org/third", rich_metadata(2));

    let orchestrator = orchestrator(provider, 2, Duration::from_millis(100));
    let batch = vec![
        Artifact::model("org/limited"),
        Artifact::model("org/second"),
        Artifact::model("org/third"),
    ];

    let records = tokio::time::timeout(Duration::from_secs(3), orchestrator.score_all(batch))
        .await
        .expect("a rate-limited model must not stall the batch")
        .unwrap();

    assert_eq!(records.len(), 3);
    assert!(records[0].outcomes().iter().all(|o| !o.is_ok()));
    assert!(records[1].outcomes().iter().all(|o| o.is_ok()));
    assert!(records[2].outcomes().iter().all(|o| o.is_ok()));
    for record in &records {
        assert_well_formed(record);
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let orchestrator = orchestrator(StaticProvider::new(), 4, Duration::from_secs(1));
    let summary = orchestrator
        .score_batch(Vec::new(), |_| panic!("nothing should be emitted"))
        .await
        .unwrap();

    assert_eq!(summary.scored, 0);
    assert_eq!(summary.skipped, 0);
}
