//! API 路由模块
//!
//! # 结构
//!
//! - [`clients`] - 客户管理接口
//! - [`products`] - 商品管理接口
//! - [`orders`] - 订单创建接口
//! - [`statistics`] - 只读统计接口
//! - [`admin`] - 全局清理接口
//! - [`health`] - 健康检查

pub mod admin;
pub mod clients;
pub mod health;
pub mod middleware;
pub mod orders;
pub mod products;
pub mod statistics;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Creation response: the entity's wire identifier (numeric suffix, or the
/// raw id for caller-supplied product ids)
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// JSON body extractor that keeps malformed input inside the error taxonomy
///
/// A body that fails to parse or deserialize is a validation failure (400
/// with the `{message}` body), not axum's default 422 rejection. Request
/// bodies are validated once here at the boundary; handlers only ever see
/// well-typed payloads.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection_to_error(rejection)),
        }
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::validation(format!("Invalid input: {}", rejection.body_text()))
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(clients::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(statistics::router())
        .merge(admin::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
