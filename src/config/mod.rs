use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::BriefError;
use crate::model::OutputLang;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: String,
    pub max_input_chars: usize,
    pub cache_ttl_secs: u64,
    pub cache_max_entries: usize,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max_requests: usize,
    pub default_lang: OutputLang,
    pub include_details: bool,
    pub artifacts_dir: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: "2025-10-01".into(),
            max_input_chars: 4000,
            cache_ttl_secs: 600,
            cache_max_entries: 512,
            rate_limit_window_secs: 60,
            rate_limit_max_requests: 30,
            default_lang: OutputLang::En,
            include_details: false,
            artifacts_dir: ".vibe/brief".into(),
            log_filter: "info".into(),
        }
    }
}

impl Config {
    /// Load from a `.toml`, `.yaml`/`.yml` or `.json` file. Keys missing from
    /// the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, BriefError> {
        let raw = fs::read_to_string(path).map_err(|e| BriefError::Config(e.to_string()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parsed = match ext.as_str() {
            "toml" => toml::from_str(&raw).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::from_str(&raw).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(&raw).map_err(|e| e.to_string()),
            other => Err(format!("unsupported config format `{other}`")),
        };
        parsed.map_err(|e| BriefError::Config(format!("{}: {e}", path.display())))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(ext: &str, body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(ext).tempfile().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn toml_overrides_and_keeps_defaults() {
        let f = write(".toml", "max_input_chars = 100\ndefault_lang = \"ar\"\n");
        let cfg = Config::load(f.path()).unwrap();
        assert_eq!(cfg.max_input_chars, 100);
        assert_eq!(cfg.default_lang, OutputLang::Ar);
        assert_eq!(cfg.cache_ttl_secs, 600);
    }

    #[test]
    fn yaml_and_json_are_accepted() {
        let y = write(".yml", "rate_limit_max_requests: 5\ninclude_details: true\n");
        let cfg = Config::load(y.path()).unwrap();
        assert_eq!(cfg.rate_limit_max_requests, 5);
        assert!(cfg.include_details);

        let j = write(".json", r#"{ "artifacts_dir": "/tmp/briefs" }"#);
        assert_eq!(Config::load(j.path()).unwrap().artifacts_dir, "/tmp/briefs");
    }

    #[test]
    fn unknown_extension_and_bad_values_are_config_errors() {
        let f = write(".ini", "x=1");
        assert!(matches!(Config::load(f.path()), Err(BriefError::Config(_))));
        let bad = write(".toml", "default_lang = \"fr\"");
        assert!(matches!(Config::load(bad.path()), Err(BriefError::Config(_))));
        assert!(matches!(
            Config::load(Path::new("/definitely/not/here.toml")),
            Err(BriefError::Config(_))
        ));
    }
}
