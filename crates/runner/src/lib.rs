//! Persona runner library.
//!
//! Drives the example scenario against `persona-domain`: build a person,
//! rotate the secret once, write the resulting secret.

pub mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use persona_domain::aggregates::Person;

pub use config::{ConfigError, ScenarioConfig};

/// Env files read from the workspace root, highest precedence first.
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// An env file that exists but could not be loaded.
#[derive(Debug)]
pub struct EnvFileError {
    pub path: PathBuf,
    pub error: dotenvy::Error,
}

/// Load every file in [`ENV_FILES`] present under `root`.
///
/// Missing files are skipped. Files that fail to load are returned so the
/// caller can report them once logging is up.
pub fn load_env_files(root: &Path) -> Vec<EnvFileError> {
    let mut failures = Vec::new();
    for filename in ENV_FILES {
        let path = root.join(filename);
        if !path.exists() {
            continue;
        }
        if let Err(error) = dotenvy::from_path(&path) {
            failures.push(EnvFileError { path, error });
        }
    }
    failures
}

/// Run the scenario and return the person in its final state.
pub fn run_scenario(config: &ScenarioConfig) -> Person {
    let mut person = Person::new(config.name.clone(), config.age, config.secret.as_str());
    tracing::debug!(name = %person.name(), age = person.age(), "Person constructed");

    person.set_secret(config.new_secret.as_str());
    tracing::debug!("Secret updated");

    person
}

/// The line written to stdout for a finished scenario.
pub fn render_output(person: &Person) -> String {
    person.secret().to_string()
}

/// Write the scenario result as a single newline-terminated line.
pub fn write_output<W: Write>(person: &Person, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", render_output(person))?;
    out.flush()
}
