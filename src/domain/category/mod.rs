//! Category Context - 分类限界上下文
//!
//! 职责:
//! - 分类匹配规则（体裁与分类标识的宽松包含匹配）
//! - 静态分类表（id/label/icon 只读查找）

mod matcher;
mod registry;

pub use matcher::{filter_by_category, matches, Categorized};
pub use registry::{Category, CategoryError, CategoryRegistry};
