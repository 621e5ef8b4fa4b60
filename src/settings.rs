use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_NOTES_DIR: &str = "notes/class-info";
pub const DEFAULT_OUTPUT: &str = "scripts/create_classes.sql";
pub const DEFAULT_EXCLUDES: &[&str] = &[".DS_Store", "other"];

const ENV_PREFIX: &str = "CLASSES";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub notes_dir: PathBuf,
    pub output: PathBuf,
    /// File-name substrings that keep a note out of the batch.
    pub exclude: Vec<String>,
}

/// Values given on the command line; they win over the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub notes_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub exclude: Vec<String>,
}

impl Settings {
    /// Defaults, then `CLASSES_*` environment variables, then `overrides`.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::build(environment(), overrides)
    }

    fn build(env: Environment, overrides: &Overrides) -> Result<Self> {
        let exclude = (!overrides.exclude.is_empty()).then(|| overrides.exclude.clone());

        Config::builder()
            .set_default("notes_dir", DEFAULT_NOTES_DIR)?
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default(
                "exclude",
                DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )?
            .add_source(env)
            .set_override_option("notes_dir", overrides.notes_dir.as_ref().map(path_str))?
            .set_override_option("output", overrides.output.as_ref().map(path_str))?
            .set_override_option("exclude", exclude)?
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("exclude")
}

fn path_str(p: &PathBuf) -> String {
    p.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn defaults() {
        let s = Settings::build(env(&[]), &Overrides::default()).unwrap();
        assert_eq!(s.notes_dir, PathBuf::from("notes/class-info"));
        assert_eq!(s.output, PathBuf::from("scripts/create_classes.sql"));
        assert_eq!(s.exclude, vec![".DS_Store", "other"]);
    }

    #[test]
    fn environment_overrides_defaults() {
        let s = Settings::build(
            env(&[("CLASSES_NOTES_DIR", "vault/classes"), ("CLASSES_EXCLUDE", "draft,archive")]),
            &Overrides::default(),
        )
        .unwrap();
        assert_eq!(s.notes_dir, PathBuf::from("vault/classes"));
        assert_eq!(s.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(s.exclude, vec!["draft", "archive"]);
    }

    #[test]
    fn cli_wins_over_environment() {
        let overrides = Overrides {
            notes_dir: None,
            output: Some(PathBuf::from("out/classes.sql")),
            exclude: vec!["tmp".into()],
        };
        let s = Settings::build(
            env(&[("CLASSES_OUTPUT", "env.sql"), ("CLASSES_EXCLUDE", "draft")]),
            &overrides,
        )
        .unwrap();
        assert_eq!(s.output, PathBuf::from("out/classes.sql"));
        assert_eq!(s.exclude, vec!["tmp"]);
        assert_eq!(s.notes_dir, PathBuf::from(DEFAULT_NOTES_DIR));
    }
}
