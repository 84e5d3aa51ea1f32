//! Store Server - 客户/商品/订单管理服务
//!
//! A small HTTP service managing clients, products and orders on top of an
//! embedded SurrealDB store, plus read-only aggregate statistics.
//!
//! # 模块结构
//!
//! ```text
//! store-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repositories)
//! ├── ident.rs       # 实体标识符约定 ("<kind>_<n>")
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod ident;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use ident::EntityKind;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
