//! Book HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{DeleteBook, GetBook, ListBooks, RegisterBook};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<crate::application::BookResponse> for BookResponse {
    fn from(b: crate::application::BookResponse) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            genre: b.genre,
            cover_url: b.cover_url,
            description: b.description,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterBookResponse {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GetBookRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub id: Uuid,
}

// ============================================================================
// Handlers
// ============================================================================

/// 登记新图书
pub async fn register_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterBookRequest>,
) -> Result<Json<ApiResponse<RegisterBookResponse>>, ApiError> {
    let command = RegisterBook {
        title: req.title,
        author: req.author,
        genre: req.genre,
        cover_url: req.cover_url,
        description: req.description,
    };

    let result = state.register_book_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(RegisterBookResponse {
        id: result.id,
        title: result.title,
    })))
}

/// 获取图书列表
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BookResponse>>>, ApiError> {
    let result = state.list_books_handler.handle(ListBooks).await?;

    let responses: Vec<BookResponse> = result.into_iter().map(BookResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetBookRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let query = GetBook { book_id: req.id };

    let result = state.get_book_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(BookResponse::from(result))))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteBookRequest>,
) -> Result<Json<ApiResponse<DeleteBookResponse>>, ApiError> {
    let command = DeleteBook { book_id: req.id };

    let result = state.delete_book_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(DeleteBookResponse {
        id: result.id,
    })))
}
