//! Book Commands

use uuid::Uuid;

/// 登记新图书命令
#[derive(Debug, Clone)]
pub struct RegisterBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: Uuid,
}
