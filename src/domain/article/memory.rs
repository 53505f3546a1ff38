use super::model::{Article, NewArticle};
use super::repository::ArticleStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// プロセス内で完結する記事ストア
///
/// PostgreSQL実装と同じ契約（挿入順のid採番、clearでの採番リセット）を持ち、
/// データベースなしでエンドポイントを検証する際に使用します。
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<Article>,
    last_id: i32,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert_all(&self, articles: &[NewArticle]) -> Result<Vec<Article>> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        // 採番に失敗した場合は1件も追加しない（PostgreSQL実装のトランザクションと同じ）
        let mut last_id = state.last_id;
        let mut inserted = Vec::with_capacity(articles.len());
        for article in articles {
            last_id = last_id
                .checked_add(1)
                .ok_or_else(|| anyhow!("記事idの採番が上限に達しました: {}", last_id))?;
            inserted.push(article.clone().into_article(last_id, now));
        }

        state.last_id = last_id;
        state.rows.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn list_all(&self) -> Result<Vec<Article>> {
        Ok(self.state.lock().await.rows.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Article>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().find(|article| article.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();
        state.rows.retain(|article| article.id != id);
        Ok(state.rows.len() < before)
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.rows.clear();
        state.last_id = 0;
        Ok(())
    }
}
