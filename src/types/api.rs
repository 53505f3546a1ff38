use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 記事が存在しない場合のメッセージ
pub const ARTICLE_NOT_FOUND: &str = "Article doesn't exist";
/// 記事IDが整数として解釈できない場合のメッセージ
pub const INVALID_ARTICLE_ID: &str = "Invalid article id";
/// リクエストボディがJSONとして解釈できない場合のメッセージ
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
/// 内部エラー時にクライアントへ返すメッセージ
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// APIハンドラーのエラー型
///
/// 各バリアントはHTTPステータスと `{ "error": { "message": ... } }` 形式の
/// レスポンスボディに変換されます。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 対象のリソースが存在しない（404）
    #[error("{message}")]
    NotFound { message: String },

    /// リクエストが不正（400）
    #[error("{message}")]
    BadRequest { message: String },

    /// ストアなど下位層で発生した想定外のエラー（500）
    #[error("内部エラー: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// 404エラーを作成
    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// 記事が存在しない場合の404エラーを作成
    pub fn article_not_found() -> Self {
        Self::not_found(ARTICLE_NOT_FOUND)
    }

    /// 400エラーを作成
    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// リクエストボディの必須項目が欠けている場合の400エラーを作成
    pub fn missing_field(field: &str) -> Self {
        Self::bad_request(format!("Missing '{}' in request body", field))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// JSONの型不一致やContent-Type不足も400として返す
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("{}: {}", INVALID_REQUEST_BODY, rejection.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorMessage<'a>,
}

#[derive(Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::NotFound { message } | Self::BadRequest { message } => message.as_str(),
            Self::Internal(e) => {
                // 詳細はログにのみ残し、クライアントには汎用メッセージを返す
                tracing::error!("リクエスト処理中に内部エラーが発生しました: {:#}", e);
                INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorMessage { message },
            }),
        )
            .into_response()
    }
}

/// APIエラーのResult型エイリアス
pub type ApiResult<T> = std::result::Result<T, ApiError>;
