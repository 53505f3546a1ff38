//! ブログ記事API
//!
//! `blogful_articles` テーブルの記事を一覧・取得・作成・削除するHTTPサーバーです。

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;
