//! Category HTTP Handlers
//!
//! 分类页与分类索引页的读接口。分类下无图书与图书拉取失败
//! 均返回空列表，由前端呈现统一的空态。

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{GetCategoryBooks, ListCategories};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CategoryBooksRequest {
    /// 分类标识（路由参数原文）
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryBookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryBooksResponse {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub total: usize,
    pub books: Vec<CategoryBookResponse>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummaryResponse {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub book_count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取分类下的图书（分类页）
pub async fn get_category_books(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryBooksRequest>,
) -> Json<ApiResponse<CategoryBooksResponse>> {
    let query = GetCategoryBooks {
        category_id: req.id,
    };

    let result = state.get_category_books_handler.handle(query).await;

    let books: Vec<CategoryBookResponse> = result
        .books
        .into_iter()
        .map(|b| CategoryBookResponse {
            id: b.id,
            title: b.title,
            author: b.author,
            genre: b.genre,
            cover_url: b.cover_url,
        })
        .collect();

    Json(ApiResponse::success(CategoryBooksResponse {
        id: result.id,
        label: result.label,
        icon: result.icon,
        total: result.total,
        books,
    }))
}

/// 列出全部分类（分类索引页）
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<CategorySummaryResponse>>> {
    let result = state.list_categories_handler.handle(ListCategories).await;

    let responses: Vec<CategorySummaryResponse> = result
        .into_iter()
        .map(|c| CategorySummaryResponse {
            id: c.id,
            label: c.label,
            icon: c.icon,
            book_count: c.book_count,
        })
        .collect();

    Json(ApiResponse::success(responses))
}
