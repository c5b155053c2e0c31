//! Bookshelf - 图书分类浏览系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书管理上下文
//! - Category Context: 分类匹配与静态分类表
//!
//! 应用层 (application/):
//! - Ports: 端口定义（BookRepository）
//! - Commands: CQRS 命令处理器（图书登记/删除）
//! - Queries: CQRS 查询处理器（分类页、分类索引、图书读取）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 测试用内存仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
