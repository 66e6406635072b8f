use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Application configuration shared by the batch and interactive drivers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the embedding endpoint (TEI-style `/embed` route).
    pub embed_url: String,
    /// Request timeout for embedding calls.
    pub embed_timeout_secs: u64,
    /// Optional JSON thesaurus snapshot; the built-in lexicon is used when unset.
    pub synonyms_path: Option<PathBuf>,
}

/// Load application configuration from environment variables already in the
/// process. Does NOT load `.env` files; the caller does that at startup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let embed_url = require("PALATE_EMBED_URL")?;
    let embed_timeout_secs = parse_u64("PALATE_EMBED_TIMEOUT_SECS", "30")?;
    let synonyms_path = lookup("PALATE_SYNONYMS_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        embed_url,
        embed_timeout_secs,
        synonyms_path,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("PALATE_EMBED_URL", "http://localhost:8080");
        m
    }

    #[test]
    fn builds_with_only_required_vars() {
        let env = full_env();
        let config = build_app_config(lookup_from_map(&env)).unwrap();
        assert_eq!(config.embed_url, "http://localhost:8080");
        assert_eq!(config.embed_timeout_secs, 30);
        assert!(config.synonyms_path.is_none());
    }

    #[test]
    fn missing_embed_url_is_an_error() {
        let env = HashMap::new();
        let err = build_app_config(lookup_from_map(&env)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "PALATE_EMBED_URL"));
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let mut env = full_env();
        env.insert("PALATE_EMBED_TIMEOUT_SECS", "soon");
        let err = build_app_config(lookup_from_map(&env)).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PALATE_EMBED_TIMEOUT_SECS")
        );
    }

    #[test]
    fn optional_vars_override_defaults() {
        let mut env = full_env();
        env.insert("PALATE_EMBED_TIMEOUT_SECS", "5");
        env.insert("PALATE_SYNONYMS_PATH", "./config/synonyms.json");
        let config = build_app_config(lookup_from_map(&env)).unwrap();
        assert_eq!(config.embed_timeout_secs, 5);
        assert_eq!(
            config.synonyms_path.as_deref(),
            Some(std::path::Path::new("./config/synonyms.json"))
        );
    }
}
