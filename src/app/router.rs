use crate::app::handler::{create_article, delete_article, get_article, list_articles};
use crate::domain::article::ArticleStore;
use axum::{routing::get, Router};
use std::sync::Arc;

/// ハンドラー間で共有する状態
///
/// ハンドラー自体は状態を持たず、毎リクエストでストアを参照します。
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
}

impl AppState {
    pub fn new<S: ArticleStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// 記事APIのルーターを構築する
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/:article_id",
            get(get_article).delete(delete_article),
        )
        .with_state(state)
}
