use super::{Config, Host};
use crate::Result;
use crate::facts::{Artifact, Category, MetadataProvider, classify};
use crate::metrics::Registry;
use crate::reports::generate_ndjson;
use crate::scoring::{BatchSummary, Orchestrator};
use camino::Utf8Path;
use ohno::IntoAppError;
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;

const LOG_TARGET: &str = "     score";

/// The models to score, plus how many URLs of each category were seen.
#[derive(Debug, Default)]
struct UrlList {
    artifacts: Vec<Artifact>,
    counts: BTreeMap<Category, usize>,
    unidentified: usize,
}

/// Classify every non-blank line, keeping the models in input order.
fn parse_url_list(text: &str) -> UrlList {
    let mut list = UrlList::default();

    for url in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let category = classify(url);
        *list.counts.entry(category).or_default() += 1;

        if category != Category::Model {
            log::debug!(target: LOG_TARGET, "Skipping {category} URL '{url}'");
            continue;
        }

        let Some(artifact) = Artifact::from_url(url) else {
            continue;
        };

        if artifact.identifier().is_none() {
            log::warn!(target: LOG_TARGET, "Model URL '{url}' does not name a model, it will be scored as unavailable");
            list.unidentified += 1;
        }

        list.artifacts.push(artifact);
    }

    list
}

/// Score every model listed in `url_file`, writing one NDJSON record per model to the host's output.
///
/// Records come out in the order their URLs appear in the file. Ctrl-C stops new models from
/// being admitted; models already being scored are finished and emitted.
///
/// # Errors
///
/// Returns an error if the file can't be read, the configuration is unusable, or writing a
/// record fails.
pub async fn score_url_file<H: Host>(
    host: &mut H,
    url_file: &Utf8Path,
    config: &Config,
    provider: Arc<dyn MetadataProvider>,
) -> Result<BatchSummary> {
    let text = fs::read_to_string(url_file).into_app_err_with(|| format!("reading URL file '{url_file}'"))?;
    let list = parse_url_list(&text);

    let count = |category| list.counts.get(&category).copied().unwrap_or_default();
    let total: usize = list.counts.values().sum();
    if total == 0 {
        log::info!(target: LOG_TARGET, "No URLs found in '{url_file}'");
    } else {
        log::info!(
            target: LOG_TARGET,
            "Read {total} URL(s) from '{url_file}': {} model, {} dataset, {} code, {} unknown",
            count(Category::Model),
            count(Category::Dataset),
            count(Category::Code),
            count(Category::Unknown)
        );
    }

    let orchestrator = Orchestrator::new(
        Registry::standard(&config.hardware_targets()?)?,
        config.metric_definitions()?,
        provider,
        config.concurrency(),
        config.metric_timeout,
    )?;

    let throttler = orchestrator.throttler();
    let shutdown = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            throttler.close();
        }
    });

    let result = orchestrator
        .score_batch(list.artifacts, |record| generate_ndjson(&record, &mut host.output()))
        .await;

    shutdown.abort();
    let summary = result?;

    log::info!(
        target: LOG_TARGET,
        "Scored {} model(s) ({} without an identifier), skipped {} unadmitted",
        summary.scored,
        list.unidentified,
        summary.skipped
    );

    Ok(summary)
}
