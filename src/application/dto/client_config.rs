//! # Client Configuration DTO
//!
//! クライアント設定のData Transfer Object

use crate::domain::entities::result_set::ResultView;

/// 既定の送信先
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/process-files/";

/// クライアント設定
///
/// 設定ファイルとCLI引数を合成した、実行時に使う設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// アセンブラサービスのURL
    pub endpoint: String,
    /// 初期表示のビュー
    pub default_view: ResultView,
}

impl ClientConfig {
    /// 新しいクライアント設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use asmsubmit::application::dto::client_config::ClientConfig;
    /// use asmsubmit::domain::entities::result_set::ResultView;
    ///
    /// let config = ClientConfig::new(
    ///     "http://assembler.local:9000/process-files/".to_string(),
    ///     ResultView::Pass1,
    /// );
    ///
    /// assert_eq!(config.default_view, ResultView::Pass1);
    /// ```
    pub fn new(endpoint: String, default_view: ResultView) -> Self {
        Self {
            endpoint,
            default_view,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string(), ResultView::default())
    }
}
