//! Book Context - 图书限界上下文
//!
//! 职责:
//! - 图书聚合管理
//! - 图书字段的值对象校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Book;
pub use errors::BookError;
pub use value_objects::{Author, BookId, CoverUrl, Genre, Title};
