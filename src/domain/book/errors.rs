//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("无效的作者: {0}")]
    InvalidAuthor(String),

    #[error("无效的体裁: {0}")]
    InvalidGenre(String),
}
