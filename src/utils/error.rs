//! 统一错误处理
//!
//! 提供应用级错误类型和错误响应结构。
//!
//! # 错误分类
//!
//! | 变体 | HTTP | 说明 |
//! |------|------|------|
//! | Validation | 400 | 请求缺少必填字段或格式错误 |
//! | NotFound | 404 | 引用的实体不存在 |
//! | Database | 500 | 底层存储不可用 |
//! | Internal | 500 | 其他内部错误 |
//!
//! 所有失败响应都带有人类可读的 `message` 字段；仅 500 级失败额外
//! 暴露原始 `error` 细节，400/404 不泄漏内部信息。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 验证失败 (400)
    #[error("{0}")]
    Validation(String),

    /// 资源不存在 (404)
    #[error("{0}")]
    NotFound(String),

    /// 数据库错误 (500)
    #[error("Database error: {0}")]
    Database(String),

    /// 内部错误 (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 错误响应体
///
/// ```json
/// { "message": "Client not found" }
/// { "message": "Error occurred", "error": "..." }
/// ```
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error occurred".to_string(),
                    Some(msg),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error occurred".to_string(),
                    Some(msg),
                )
            }
        };

        let body = Json(ErrorBody {
            message,
            error: detail,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
