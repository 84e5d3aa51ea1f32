//! 工具模块 - 错误类型和日志
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 处理器的 Result 类型别名
//! - [`logger`] - 日志初始化

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
