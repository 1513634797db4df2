use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Request body limit for form submissions, uploads included
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_upload_dir() -> String {
    "static/uploads".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl SystemConfig {
    pub fn upload_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Settings for the external generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is blank
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.ibm.com/granite/v1/generate".to_string()
}

fn default_api_key_env() -> String {
    "GRANITE_API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

impl TranslatorConfig {
    /// Credential used for the external API, if any.
    ///
    /// An explicit `api_key` wins over the environment. Values left as an
    /// unresolved `${VAR}` placeholder count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn usable(value: &str) -> bool {
            let trimmed = value.trim();
            !trimmed.is_empty() && !(trimmed.starts_with("${") && trimmed.ends_with('}'))
        }

        if let Some(key) = self.api_key.as_deref().filter(|k| usable(k)) {
            return Some(key.trim().to_string());
        }

        lookup(&self.api_key_env)
            .filter(|k| usable(k))
            .map(|k| k.trim().to_string())
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = load_text_file(path)?;
        let content = substitute_env_vars(&content, |name| std::env::var(name).ok());

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

/// Replace `${VAR_NAME}` occurrences; unknown variables are left untouched.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static pattern");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Read a UTF-8 text file, dropping a leading BOM if present.
fn load_text_file(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;
    let (cow, _) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    Ok(cow.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: Config = serde_yaml::from_str("system_config:\n  port: 8080\n").unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.upload_dir, "static/uploads");
        assert_eq!(config.system_config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.translator_config.max_tokens, 1000);
        assert_eq!(config.translator_config.timeout_secs, 30);
        assert!(config.translator_config.api_key.is_none());
    }

    #[test]
    fn env_substitution_keeps_unknown_placeholders() {
        let out = substitute_env_vars("key: ${KNOWN} other: ${UNKNOWN}", |name| {
            (name == "KNOWN").then(|| "abc".to_string())
        });
        assert_eq!(out, "key: abc other: ${UNKNOWN}");
    }

    #[test]
    fn explicit_key_beats_environment() {
        let cfg = TranslatorConfig {
            api_key: Some("from-file".to_string()),
            ..TranslatorConfig::default()
        };
        let key = cfg.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn unresolved_placeholder_falls_back_to_environment() {
        let cfg = TranslatorConfig {
            api_key: Some("${GRANITE_API_KEY}".to_string()),
            ..TranslatorConfig::default()
        };
        assert_eq!(
            cfg.resolve_api_key_with(|name| {
                (name == "GRANITE_API_KEY").then(|| "env-key".to_string())
            })
            .as_deref(),
            Some("env-key")
        );
        assert_eq!(cfg.resolve_api_key_with(|_| None), None);
    }

    #[test]
    fn blank_environment_value_means_no_credential() {
        let cfg = TranslatorConfig::default();
        assert_eq!(cfg.resolve_api_key_with(|_| Some("   ".to_string())), None);
    }

    #[test]
    fn load_json_with_bom() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"\xEF\xBB\xBF{\"system_config\": {\"upload_dir\": \"uploads\"}}")
            .unwrap();
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.system_config.upload_dir, "uploads");
        assert_eq!(config.system_config.port, 5000);
    }

    #[test]
    fn upload_limit_is_configurable() {
        let config: Config =
            serde_yaml::from_str("system_config:\n  max_upload_bytes: 2048\n").unwrap();
        assert_eq!(config.system_config.max_upload_bytes, 2048);
        assert_eq!(config.system_config.port, 5000);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(Config::load("/nonexistent/conf.yaml").is_err());
    }
}
