//! In-Memory 实现
//!
//! 测试与本地开发用的内存适配器

mod book_repo;

pub use book_repo::InMemoryBookRepository;
