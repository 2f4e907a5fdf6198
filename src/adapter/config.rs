//! Configuration File
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::client_config::{ClientConfig, DEFAULT_ENDPOINT};
use crate::domain::entities::result_set::ResultView;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// アセンブラサービスのURL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// 初期表示のビュー（"pass1" / "pass2" / "both"）
    #[serde(default)]
    pub default_view: ResultView,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_view: ResultView::default(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが無い場合は既定値を返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// CLIの上書きを適用して実行時設定を作る
    pub fn into_client_config(
        self,
        endpoint: Option<String>,
        view: Option<ResultView>,
    ) -> ClientConfig {
        ClientConfig::new(
            endpoint.unwrap_or(self.endpoint),
            view.unwrap_or(self.default_view),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/asmsubmit/config.json").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/process-files/");
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "endpoint": "http://assembler.lab:8080/process-files/",
            "default_view": "pass1"
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.endpoint, "http://assembler.lab:8080/process-files/");
        assert_eq!(config.default_view, ResultView::Pass1);
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"default_view": "both"}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.default_view, ResultView::Both);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_into_client_config_overrides() {
        let config = Config::default();

        let client = config
            .clone()
            .into_client_config(Some("http://localhost:9/p/".to_string()), None);
        assert_eq!(client.endpoint, "http://localhost:9/p/");
        assert_eq!(client.default_view, ResultView::Pass2);

        let client = config.into_client_config(None, Some(ResultView::Pass1));
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.default_view, ResultView::Pass1);
    }
}
