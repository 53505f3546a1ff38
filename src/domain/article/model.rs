use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// 記事エンティティ（blogful_articlesテーブルの1行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(with = "iso8601")]
    pub date_published: DateTime<Utc>,
}

// 挿入用の記事（idはストアが採番する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    /// 省略時はストアの現在時刻
    pub date_published: Option<DateTime<Utc>>,
}

impl NewArticle {
    pub fn new<T: Into<String>, C: Into<String>>(title: T, content: C) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            date_published: None,
        }
    }

    /// 公開日時を指定する
    pub fn published_at(mut self, date_published: DateTime<Utc>) -> Self {
        self.date_published = Some(date_published);
        self
    }

    /// 採番済みidを付与して記事エンティティに変換する
    pub fn into_article(self, id: i32, default_date: DateTime<Utc>) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            date_published: self.date_published.unwrap_or(default_date),
        }
    }
}

/// 日時をJavaScriptの `Date#toISOString` と同じ形式（UTC、ミリ秒精度、`Z`終端）で扱う
///
/// `#[serde(with = "iso8601")]` で使用します。
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// `2029-01-22T16:28:32.615Z` 形式の文字列に変換する
    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// RFC 3339文字列を解析してUTCに正規化する
    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// `Option<DateTime<Utc>>` 用
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw).map(Some).map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
