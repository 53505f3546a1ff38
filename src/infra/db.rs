use crate::infra::config::AppConfig;
use crate::types::{InfraError, InfraResult};
use sqlx::PgPool;

/// データベース接続プールを作成
pub async fn create_pool(database_url: &str) -> InfraResult<PgPool> {
    PgPool::connect(database_url)
        .await
        .map_err(InfraError::database_connection)
}

/// データベースの初期化（マイグレーション実行）
pub async fn initialize_database(pool: &PgPool) -> InfraResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(InfraError::migration)
}

/// プールの作成とデータベース初期化を一括で行う便利関数
pub async fn setup_database(config: &AppConfig) -> InfraResult<PgPool> {
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("データベースに接続しました");
    initialize_database(&pool).await?;
    tracing::info!("スキーマの適用が完了しました");
    Ok(pool)
}
