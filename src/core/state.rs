use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::SequenceRepository;
use crate::utils::AppError;

/// 服务器状态 - 持有所有共享服务的引用
///
/// ServerState 是服务的核心数据结构。克隆成本极低：数据库句柄和
/// 序列生成器内部均为共享引用。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | sequences | SequenceRepository | 实体 ID 序列生成器 (全局单例) |
///
/// `sequences` 必须全局唯一：它持有按实体类型分键的初始化锁，
/// 每个请求各自构造会失去跨请求的序列化保证。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 序列生成器 (client/product/order 计数器)
    pub sequences: SequenceRepository,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database)
    /// 3. 序列生成器
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;
        let db = db_service.db;

        let sequences = SequenceRepository::new(db.clone());

        Ok(Self {
            config: config.clone(),
            db,
            sequences,
        })
    }
}
