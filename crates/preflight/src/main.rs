use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bankruptcy_core::classifier::LogisticModel;
use bankruptcy_core::pipeline::{Outcome, RawRequest, RequestPipeline};

/// Sample submission used to exercise the full pipeline once.
const SAMPLE: [(&str, &str); 8] = [
    ("interest_expense_ratio", "0.2"),
    ("net_profit_to_equity", "0.1"),
    ("tax_rate_a", "0.25"),
    ("stable_profit_per_share", "1.5"),
    ("working_capital_to_total_assets", "0.3"),
    ("cash_flow_per_share", "2.0"),
    ("contingent_liabilities_to_net_worth", "0.05"),
    ("lang", "en"),
];

#[derive(Debug, Parser)]
#[command(name = "bankruptcy_preflight")]
struct Args {
    /// Model artifact to check. Defaults to MODEL_PATH.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Static asset directory to check. Defaults to STATIC_DIR.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = bankruptcy_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(model) = args.model {
        settings.model_path = model;
    }
    if let Some(dir) = args.static_dir {
        settings.static_dir = dir;
    }

    let mut failed = Vec::new();

    match check_model(&settings.model_path) {
        Ok(summary) => tracing::info!(check = "model", %summary, "OK"),
        Err(err) => {
            let chain = format!("{err:#}");
            tracing::error!(check = "model", error = %chain, "MISSING");
            sentry_anyhow::capture_anyhow(&err);
            failed.push("model");
        }
    }

    match check_static_dir(&settings) {
        Ok(()) => tracing::info!(check = "static", dir = %settings.static_dir.display(), "OK"),
        Err(err) => {
            let chain = format!("{err:#}");
            tracing::error!(check = "static", error = %chain, "MISSING");
            failed.push("static");
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("preflight failed: {}", failed.join(", "));
    }

    tracing::info!("preflight passed");
    Ok(())
}

/// Loads the artifact and runs the sample submission through the whole pipeline.
fn check_model(path: &Path) -> anyhow::Result<String> {
    let model = LogisticModel::load(path)?;
    let pipeline = RequestPipeline::new(Arc::new(model));

    let query = SAMPLE
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let outcome = pipeline
        .run(&RawRequest::from_query(query))
        .context("sample submission failed")?;

    let Outcome::Rendered(response) = outcome else {
        anyhow::bail!("sample submission did not produce a result");
    };
    anyhow::ensure!(
        (0.0..=100.0).contains(&response.probability),
        "probability out of range: {}",
        response.probability
    );

    Ok(format!(
        "{} -> {} ({}%)",
        pipeline.classifier_name(),
        response.risk_label,
        response.probability
    ))
}

fn check_static_dir(settings: &bankruptcy_core::config::Settings) -> anyhow::Result<()> {
    let dir = settings.require_static_dir()?;
    let stylesheet = dir.join("style.css");
    anyhow::ensure!(
        stylesheet.is_file(),
        "missing stylesheet {}",
        stylesheet.display()
    );
    Ok(())
}

fn init_sentry(settings: &bankruptcy_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_model_passes() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../model/model.json");
        let summary = check_model(&path).unwrap();
        assert!(summary.starts_with("bankruptcy-logreg@"));
    }

    #[test]
    fn missing_model_fails() {
        assert!(check_model(Path::new("/nonexistent/model.json")).is_err());
    }
}
