use crate::app::router::{build_router, AppState};
use crate::infra::config::AppConfig;
use crate::types::{InfraError, InfraResult};
use tokio::net::TcpListener;

/// HTTPサーバーを起動し、Ctrl-Cを受けるまで待ち受ける
pub async fn serve(config: &AppConfig, state: AppState) -> InfraResult<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| InfraError::bind(addr.as_str(), e))?;

    tracing::info!(%addr, "HTTPサーバーを起動しました");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InfraError::serve)?;

    tracing::info!("HTTPサーバーを停止しました");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("シャットダウンシグナルを受信しました"),
        Err(e) => {
            tracing::error!("シグナルハンドラーの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
