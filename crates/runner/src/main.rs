//! Persona - prints a person's secret after one rotation.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persona::{load_env_files, run_scenario, write_output, ScenarioConfig};

fn main() -> anyhow::Result<()> {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");
    let env_failures = load_env_files(&repo_root);

    // Logs go to stderr; stdout carries only the result.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "persona=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for failure in &env_failures {
        tracing::warn!(
            path = %failure.path.display(),
            error = %failure.error,
            "Failed to load env file"
        );
    }

    let config = ScenarioConfig::from_env().context("Failed to load scenario configuration")?;
    tracing::info!(name = %config.name, age = config.age, "Running scenario");

    let person = run_scenario(&config);
    write_output(&person, &mut std::io::stdout().lock()).context("Failed to write output")?;

    Ok(())
}
