//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - 設定エラー: 環境変数や設定ファイルに関する失敗
//! - インフラエラー: データベース接続やサーバー起動の失敗
//! - APIエラー: HTTPレスポンスへ変換されるエラー

pub mod api;
pub mod config;
pub mod infra;

// 便利な再エクスポート
pub use api::{ApiError, ApiResult};
pub use config::{ConfigError, ConfigResult};
pub use infra::{InfraError, InfraResult};
