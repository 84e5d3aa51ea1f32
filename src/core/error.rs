use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动/运行期错误
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    App(#[from] AppError),
}

/// 服务器操作的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
