//! Category Queries

/// 获取分类下图书查询
///
/// category_id 来自路由参数，不要求在分类表中存在。
#[derive(Debug, Clone)]
pub struct GetCategoryBooks {
    pub category_id: String,
}

/// 列出全部分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;
