//! 記事エンドポイントのハンドラー
//!
//! 各リクエストは「受信 → 検証 → ストア参照 → 応答」の順に処理され、
//! ストアの「存在しない」結果はここで404に変換されます。

use crate::app::router::AppState;
use crate::domain::article::{iso8601, Article, NewArticle};
use crate::types::api::INVALID_ARTICLE_ID;
use crate::types::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `POST /articles` のリクエストボディ
///
/// 必須項目の欠落を400として返すため、各項目はOptionで受け取ります。
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "iso8601::option::deserialize")]
    pub date_published: Option<DateTime<Utc>>,
}

impl CreateArticleRequest {
    /// 必須項目を検証して挿入用の記事に変換する
    pub fn into_new_article(self) -> ApiResult<NewArticle> {
        let title = self.title.ok_or_else(|| ApiError::missing_field("title"))?;
        let content = self
            .content
            .ok_or_else(|| ApiError::missing_field("content"))?;

        Ok(NewArticle {
            title,
            content,
            date_published: self.date_published,
        })
    }
}

/// パスパラメータの記事idを解釈する
fn parse_article_id(raw: &str) -> ApiResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(INVALID_ARTICLE_ID))
}

/// `GET /articles`
pub async fn list_articles(State(state): State<AppState>) -> ApiResult<Json<Vec<Article>>> {
    let articles = state.store.list_all().await?;
    tracing::debug!(count = articles.len(), "記事一覧を返却します");
    Ok(Json(articles))
}

/// `GET /articles/:article_id`
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<Article>> {
    let id = parse_article_id(&article_id)?;
    match state.store.get_by_id(id).await? {
        Some(article) => Ok(Json(article)),
        None => {
            tracing::debug!(id, "記事が見つかりません");
            Err(ApiError::article_not_found())
        }
    }
}

/// `POST /articles`
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let new_article = payload.into_new_article()?;
    let article = state
        .store
        .insert_all(std::slice::from_ref(&new_article))
        .await?
        .pop()
        .ok_or_else(|| anyhow::anyhow!("挿入した記事がストアから返されませんでした"))?;

    tracing::info!(id = article.id, "記事を作成しました");
    let location = format!("/articles/{}", article.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(article)))
}

/// `DELETE /articles/:article_id`
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_article_id(&article_id)?;
    if state.store.delete_by_id(id).await? {
        tracing::info!(id, "記事を削除しました");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::article_not_found())
    }
}
