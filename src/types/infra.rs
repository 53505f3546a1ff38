use crate::types::ConfigError;
use thiserror::Error;

/// インフラストラクチャ層のエラー型
/// データベース接続、スキーマ適用、HTTPサーバーの起動など基盤的なエラーを定義
#[derive(Error, Debug)]
pub enum InfraError {
    /// データベース接続エラー
    #[error("データベース接続エラー: {source}")]
    DatabaseConnection {
        #[source]
        source: sqlx::Error,
    },

    /// マイグレーション実行エラー
    #[error("データベースマイグレーションエラー: {source}")]
    Migration {
        #[source]
        source: sqlx::migrate::MigrateError,
    },

    /// 待ち受けアドレスのバインドに失敗
    #[error("アドレスのバインドに失敗しました: {addr} - {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTPサーバー実行中のエラー
    #[error("HTTPサーバーエラー: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InfraError {
    /// データベース接続エラーを作成
    pub fn database_connection(source: sqlx::Error) -> Self {
        Self::DatabaseConnection { source }
    }

    /// マイグレーションエラーを作成
    pub fn migration(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration { source }
    }

    /// バインドエラーを作成
    pub fn bind<A: Into<String>>(addr: A, source: std::io::Error) -> Self {
        Self::Bind {
            addr: addr.into(),
            source,
        }
    }

    /// サーバー実行エラーを作成
    pub fn serve(source: std::io::Error) -> Self {
        Self::Serve { source }
    }
}

/// インフラエラーのResult型エイリアス
pub type InfraResult<T> = std::result::Result<T, InfraError>;
