//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    DeleteBookHandler,
    RegisterBookHandler,
    // Query handlers
    GetBookHandler,
    GetCategoryBooksHandler,
    ListBooksHandler,
    ListCategoriesHandler,
    // Ports
    BookRepositoryPort,
};
use crate::domain::category::CategoryRegistry;

/// 应用状态
///
/// 分类表在启动时装配，之后只读共享。
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,
    pub categories: Arc<CategoryRegistry>,

    // ========== Command Handlers ==========
    pub register_book_handler: RegisterBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
    pub get_category_books_handler: GetCategoryBooksHandler,
    pub list_categories_handler: ListCategoriesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>, categories: Arc<CategoryRegistry>) -> Self {
        Self {
            // Ports
            book_repo: book_repo.clone(),
            categories: categories.clone(),

            // Command handlers
            register_book_handler: RegisterBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            // Query handlers
            get_book_handler: GetBookHandler::new(book_repo.clone()),
            list_books_handler: ListBooksHandler::new(book_repo.clone()),
            get_category_books_handler: GetCategoryBooksHandler::new(
                book_repo.clone(),
                categories.clone(),
            ),
            list_categories_handler: ListCategoriesHandler::new(book_repo, categories),
        }
    }
}
