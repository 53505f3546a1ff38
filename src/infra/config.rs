//! アプリケーション設定の読み込み
//!
//! 設定は次の順で解決されます（後のものが優先）。
//! 1. 既定値
//! 2. `BLOGFUL_CONFIG` で指定されたYAMLファイル
//! 3. 環境変数 `DATABASE_URL` / `HOST` / `PORT`

use crate::infra::storage::file::load_yaml_from_file;
use crate::types::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// 設定ファイルのパスを指定する環境変数
pub const CONFIG_PATH_ENV: &str = "BLOGFUL_CONFIG";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// 解決済みのアプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// HTTPサーバーの待ち受けアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// YAML設定ファイルの内容（全項目省略可）
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub database_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// プロセスの環境変数から設定を読み込む
pub fn load_config() -> ConfigResult<AppConfig> {
    let file = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_file_config(&path)?,
        Err(_) => FileConfig::default(),
    };
    resolve_config(file, |name| env::var(name).ok())
}

/// YAML設定ファイルを読み込む
pub fn load_file_config(path: &str) -> ConfigResult<FileConfig> {
    if !Path::new(path).exists() {
        return Err(ConfigError::missing_config_file(path));
    }
    let file: FileConfig = load_yaml_from_file(path)
        .map_err(|e| ConfigError::invalid_config_file(path, format!("{:#}", e)))?;
    tracing::debug!(path, "設定ファイルを読み込みました");
    Ok(file)
}

/// ファイル設定と環境変数を合成して最終的な設定を作る
///
/// `lookup` は環境変数の参照関数です。テストではHashMapなどを渡します。
pub fn resolve_config<F>(file: FileConfig, lookup: F) -> ConfigResult<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let database_url = lookup("DATABASE_URL")
        .or(file.database_url)
        .ok_or_else(|| ConfigError::missing_env_var("DATABASE_URL"))?;

    let host = lookup("HOST")
        .or(file.host)
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match lookup("PORT") {
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
            ConfigError::invalid_value(format!("PORTは0〜65535の整数である必要があります: {}", raw))
        })?,
        None => file.port.unwrap_or(DEFAULT_PORT),
    };

    Ok(AppConfig {
        database_url,
        host,
        port,
    })
}
