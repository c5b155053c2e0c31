//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/book/register     POST  登记图书
//! - /api/book/delete       POST  删除图书
//! - /api/book/get          POST  获取图书详情
//! - /api/book/list         GET   列出全部图书
//! - /api/category/list     GET   列出全部分类（含图书数量）
//! - /api/category/books    POST  获取分类下的图书（分类页）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/book", book_routes())
        .nest("/category", category_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(handlers::register_book))
        .route("/delete", post(handlers::delete_book))
        .route("/get", post(handlers::get_book))
        .route("/list", get(handlers::list_books))
}

/// Category 路由
fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_categories))
        .route("/books", post(handlers::get_category_books))
}
