//! 記事エンドポイントの統合テスト共通ヘルパー

use axum_test::TestServer;
use blogful::app::router::{build_router, AppState};
use blogful::domain::article::{iso8601, Article, ArticleStore, NewArticle};
use serde_json::{json, Value};

/// テスト用の記事データ（`fixtures/articles.sql` と同じ内容）
pub fn make_articles_array() -> Vec<NewArticle> {
    vec![
        NewArticle::new(
            "First test post!",
            "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Natus consequuntur deserunt commodi, nobis qui inventore corrupti iusto aliquid debitis unde non.",
        )
        .published_at(iso8601::parse("2029-01-22T16:28:32.615Z").unwrap()),
        NewArticle::new(
            "Second test post!",
            "Lorem ipsum dolor sit amet consectetur adipisicing elit. Cum, exercitationem cupiditate dignissimos est perspiciatis, nobis commodi alias saepe atque facilis labore sequi deleniti.",
        )
        .published_at(iso8601::parse("2100-05-22T16:28:32.615Z").unwrap()),
        NewArticle::new(
            "Third test post!",
            "Lorem ipsum dolor sit amet consectetur adipisicing elit. Possimus, voluptate? Necessitatibus, reiciendis? Cupiditate totam laborum esse animi ratione ipsa dignissimos laboriosam eos similique cumque.",
        )
        .published_at(iso8601::parse("1919-12-22T16:28:32.615Z").unwrap()),
        NewArticle::new(
            "Fourth test post!",
            "Lorem ipsum dolor sit amet consectetur adipisicing elit. Earum molestiae accusamus veniam consectetur tempora, corporis obcaecati ad nisi asperiores tenetur, autem magnam.",
        )
        .published_at(iso8601::parse("1919-12-22T16:28:32.615Z").unwrap()),
    ]
}

/// fixtureの記事が1から順に採番された場合の期待JSON
pub fn expected_article_json(id: i32, article: &NewArticle) -> Value {
    let date_published = article
        .date_published
        .expect("fixtureには公開日時が必要です");
    json!({
        "id": id,
        "title": article.title,
        "content": article.content,
        "date_published": iso8601::format(&date_published),
    })
}

pub fn expected_articles_json(articles: &[NewArticle]) -> Value {
    Value::Array(
        articles
            .iter()
            .enumerate()
            .map(|(i, article)| expected_article_json(i as i32 + 1, article))
            .collect(),
    )
}

/// ストアを差し込んだテストサーバーを作成する
pub fn test_server<S: ArticleStore + 'static>(store: S) -> TestServer {
    TestServer::new(build_router(AppState::new(store))).expect("テストサーバーの起動に失敗")
}

/// 挿入済み記事をJSONに変換する
pub fn to_json(article: &Article) -> Value {
    serde_json::to_value(article).expect("記事のシリアライズに失敗")
}

pub fn not_found_body() -> Value {
    json!({ "error": { "message": "Article doesn't exist" } })
}
