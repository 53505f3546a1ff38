use anyhow::{Context, Result};
use blogful::{
    app::{router::AppState, server::serve},
    domain::article::PgArticleStore,
    infra::{config::load_config, db::setup_database},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    // RUST_LOG未設定時はinfo
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config().context("設定の読み込みに失敗しました")?;
    let pool = setup_database(&config)
        .await
        .context("データベースの準備に失敗しました")?;

    let state = AppState::new(PgArticleStore::new(pool));
    serve(&config, state)
        .await
        .context("HTTPサーバーの実行に失敗しました")?;

    Ok(())
}
