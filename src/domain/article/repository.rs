use super::model::{Article, NewArticle};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// 記事ストアの抽象化トレイト
///
/// PostgreSQL実装とインメモリ実装を統一的に扱うためのインターフェースです。
/// 「存在しない」は正常な結果として `Option` / `bool` で表現し、
/// エラーは接続断などの想定外の失敗にのみ使用します。
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// 記事をまとめて追加し、採番済みの記事を挿入順で返す
    async fn insert_all(&self, articles: &[NewArticle]) -> Result<Vec<Article>>;

    /// 全記事を挿入順で取得する（0件なら空のVec）
    async fn list_all(&self) -> Result<Vec<Article>>;

    /// idで記事を1件取得する
    async fn get_by_id(&self, id: i32) -> Result<Option<Article>>;

    /// idで記事を1件削除する。削除した場合は `true`
    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    /// 全記事を削除し、採番を初期状態に戻す（冪等）
    async fn clear(&self) -> Result<()>;
}

/// `sqlx` を使用したPostgreSQLの記事ストア
#[derive(Debug, Clone)]
pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn insert_all(&self, articles: &[NewArticle]) -> Result<Vec<Article>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("トランザクションの開始に失敗しました")?;

        let mut inserted = Vec::with_capacity(articles.len());
        for article in articles {
            let row = sqlx::query_as::<_, Article>(
                r#"
                INSERT INTO blogful_articles (title, content, date_published)
                VALUES ($1, $2, COALESCE($3::timestamptz, now()))
                RETURNING id, title, content, date_published
                "#,
            )
            .bind(&article.title)
            .bind(&article.content)
            .bind(article.date_published)
            .fetch_one(&mut *tx)
            .await
            .context("記事のデータベースへの挿入に失敗しました")?;
            inserted.push(row);
        }

        tx.commit()
            .await
            .context("トランザクションのコミットに失敗しました")?;

        tracing::debug!(count = inserted.len(), "記事を挿入しました");
        Ok(inserted)
    }

    async fn list_all(&self) -> Result<Vec<Article>> {
        let articles = sqlx::query_as::<_, Article>(
            "SELECT id, title, content, date_published FROM blogful_articles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("記事一覧の取得に失敗")?;

        Ok(articles)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Article>> {
        sqlx::query_as::<_, Article>(
            "SELECT id, title, content, date_published FROM blogful_articles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("記事の取得に失敗: id={}", id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogful_articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("記事の削除に失敗: id={}", id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("TRUNCATE blogful_articles RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .context("記事テーブルのクリアに失敗")?;

        Ok(())
    }
}
