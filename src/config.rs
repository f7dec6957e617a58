//! Runtime configuration from flags, the environment and `.env`.

use std::path::{Path, PathBuf};

/// Environment variable naming the snapshot file.
pub const SNAPSHOT_ENV: &str = "CONSTRUCT_LENS_SNAPSHOT";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "CONSTRUCT_LENS_LOG";

/// Filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensConfig {
    /// Snapshot file to serve.
    pub snapshot: PathBuf,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl LensConfig {
    /// Loads `.env` (if present) and resolves against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no snapshot file is configured.
    pub fn load(snapshot_flag: Option<&Path>) -> Result<Self, String> {
        load_dotenv();
        Self::resolve(snapshot_flag, |key| std::env::var(key).ok())
    }

    /// Resolves configuration; the flag wins over the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the flag nor [`SNAPSHOT_ENV`] is set.
    pub fn resolve<F>(snapshot_flag: Option<&Path>, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot = snapshot_flag
            .map(Path::to_path_buf)
            .or_else(|| lookup(SNAPSHOT_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .ok_or_else(|| format!("no snapshot file given: pass --snapshot or set {SNAPSHOT_ENV}"))?;
        Ok(Self { snapshot, log_filter: log_filter(lookup) })
    }
}

/// Tracing filter from [`LOG_ENV`], or [`DEFAULT_LOG_FILTER`].
fn log_filter<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_ENV).filter(|v| !v.is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned())
}

/// Loads `.env` from the working directory or its parents, if any.
fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::trace!(path = %path.display(), "loaded .env");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn flag_wins_over_environment() {
        let config =
            LensConfig::resolve(Some(Path::new("flag.json")), env(&[(SNAPSHOT_ENV, "env.json")]))
                .unwrap();
        assert_eq!(config.snapshot, PathBuf::from("flag.json"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn environment_is_used_without_flag() {
        let config = LensConfig::resolve(
            None,
            env(&[(SNAPSHOT_ENV, "env.yaml"), (LOG_ENV, "construct_lens=debug")]),
        )
        .unwrap();
        assert_eq!(config.snapshot, PathBuf::from("env.yaml"));
        assert_eq!(config.log_filter, "construct_lens=debug");
    }

    #[test]
    fn empty_log_variable_falls_back_to_default_filter() {
        let config =
            LensConfig::resolve(None, env(&[(SNAPSHOT_ENV, "app.json"), (LOG_ENV, "")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let err = LensConfig::resolve(None, env(&[(SNAPSHOT_ENV, "")])).unwrap_err();
        assert!(err.contains("--snapshot"));
    }
}
