//! CLI configuration: flags and environment over a TOML file over defaults.
//!
//! ```toml
//! [router]
//! fallback_handler = "Carlos"
//!
//! [sync]
//! base_url = "http://localhost:3001"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;
use triagem_core::{DEFAULT_FALLBACK_HANDLER, RouterConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub router: RouterConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub base_url: Option<String>,
}

/// Effective settings after merging every source.
#[derive(Debug)]
pub struct Settings {
    pub router: RouterConfig,
    pub api_url: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Merge flag/environment values (already combined by clap) over the file.
pub fn resolve(
    config_path: Option<&Path>,
    fallback_handler: Option<String>,
    api_url: Option<String>,
) -> anyhow::Result<Settings> {
    let file = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut router = file.router;
    if let Some(handler) = fallback_handler.filter(|h| !h.trim().is_empty()) {
        router.fallback_handler = handler;
    }
    router.fallback_handler = router.fallback_handler.trim().to_string();
    if router.fallback_handler.is_empty() {
        debug!("blank fallback handler, using {DEFAULT_FALLBACK_HANDLER}");
        router.fallback_handler = DEFAULT_FALLBACK_HANDLER.to_string();
    }

    Ok(Settings {
        router,
        api_url: api_url.or(file.sync.base_url),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use triagem_core::{RoutingForm, determine_queue_assignment};

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let settings = resolve(None, None, None).unwrap();
        assert_eq!(settings.router.fallback_handler, DEFAULT_FALLBACK_HANDLER);
        assert_eq!(settings.api_url, None);
    }

    #[test]
    fn file_values_apply() {
        let file = config_file(
            "[router]\nfallback_handler = \"Iago\"\n\n\
             [sync]\nbase_url = \"http://protocolos:3001\"\n",
        );
        let settings = resolve(Some(file.path()), None, None).unwrap();
        assert_eq!(settings.router.fallback_handler, "Iago");
        assert_eq!(settings.api_url.as_deref(), Some("http://protocolos:3001"));
    }

    #[test]
    fn flags_override_file() {
        let file = config_file("[router]\nfallback_handler = \"Iago\"\n");
        let settings = resolve(
            Some(file.path()),
            Some("Enzo".into()),
            Some("http://localhost:9000".into()),
        )
        .unwrap();
        assert_eq!(settings.router.fallback_handler, "Enzo");
        assert_eq!(settings.api_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn blank_flag_does_not_clear_handler() {
        let settings = resolve(None, Some("  ".into()), None).unwrap();
        assert_eq!(settings.router.fallback_handler, DEFAULT_FALLBACK_HANDLER);
    }

    #[test]
    fn blank_file_handler_falls_back_to_default() {
        let file = config_file("[router]\nfallback_handler = \"\"\n");
        let settings = resolve(Some(file.path()), None, None).unwrap();
        assert_eq!(settings.router.fallback_handler, DEFAULT_FALLBACK_HANDLER);

        let decision = determine_queue_assignment(&RoutingForm::default(), false, &settings.router);
        assert_eq!(decision.assigned_to(), Some(DEFAULT_FALLBACK_HANDLER));
    }

    #[test]
    fn file_handler_is_trimmed() {
        let file = config_file("[router]\nfallback_handler = \" Iago \"\n");
        let settings = resolve(Some(file.path()), None, None).unwrap();
        assert_eq!(settings.router.fallback_handler, "Iago");
    }

    #[test]
    fn blank_flag_keeps_file_handler() {
        let file = config_file("[router]\nfallback_handler = \"Iago\"\n");
        let settings = resolve(Some(file.path()), Some(" ".into()), None).unwrap();
        assert_eq!(settings.router.fallback_handler, "Iago");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = config_file("[sync]\nbase_url = \"http://x\"\n");
        let settings = resolve(Some(file.path()), None, None).unwrap();
        assert_eq!(settings.router.fallback_handler, DEFAULT_FALLBACK_HANDLER);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = resolve(Some(Path::new("/nonexistent/triagem.toml")), None, None).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = config_file("[router\nfallback_handler = 3");
        assert!(resolve(Some(file.path()), None, None).is_err());
    }
}
