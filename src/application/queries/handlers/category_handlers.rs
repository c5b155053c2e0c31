//! Category Query Handlers
//!
//! 分类页的读路径：一次全量拉取 + 一次同步过滤。
//! 仓储失败降级为空结果（记录日志，不向上抛错）。

use std::sync::Arc;

use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::application::queries::handlers::BookResponse;
use crate::application::queries::{GetCategoryBooks, ListCategories};
use crate::domain::category::CategoryRegistry;
use crate::domain::{filter_by_category, matches};

// ============================================================================
// Response DTOs
// ============================================================================

/// 分类页响应
///
/// 分类不在分类表中时仍可渲染：label 回退为原始标识，无图标。
#[derive(Debug, Clone)]
pub struct CategoryBooksResponse {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub total: usize,
    pub books: Vec<BookResponse>,
}

/// 分类摘要响应（分类索引页）
#[derive(Debug, Clone)]
pub struct CategorySummaryResponse {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub book_count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetCategoryBooks Handler
pub struct GetCategoryBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    categories: Arc<CategoryRegistry>,
}

impl GetCategoryBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>, categories: Arc<CategoryRegistry>) -> Self {
        Self {
            book_repo,
            categories,
        }
    }

    /// 获取分类下的图书
    ///
    /// 不返回 Result：仓储失败与"分类下没有图书"同样呈现为空列表，
    /// 错误只记录日志。
    pub async fn handle(&self, query: GetCategoryBooks) -> CategoryBooksResponse {
        let records = fetch_all_or_empty(self.book_repo.as_ref(), &query.category_id).await;
        let matched = filter_by_category(&query.category_id, records);

        let (label, icon) = match self.categories.get(&query.category_id) {
            Some(category) => (
                category.label().to_string(),
                category.icon().map(String::from),
            ),
            None => (query.category_id.clone(), None),
        };

        let books: Vec<BookResponse> = matched.into_iter().map(BookResponse::from).collect();

        CategoryBooksResponse {
            id: query.category_id,
            label,
            icon,
            total: books.len(),
            books,
        }
    }
}

/// ListCategories Handler
pub struct ListCategoriesHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    categories: Arc<CategoryRegistry>,
}

impl ListCategoriesHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>, categories: Arc<CategoryRegistry>) -> Self {
        Self {
            book_repo,
            categories,
        }
    }

    /// 列出分类表中的全部分类及各自的图书数量
    ///
    /// 与分类页同一降级策略：仓储失败时数量为 0。
    pub async fn handle(&self, _query: ListCategories) -> Vec<CategorySummaryResponse> {
        let records = fetch_all_or_empty(self.book_repo.as_ref(), "category index").await;

        self.categories
            .iter()
            .map(|category| CategorySummaryResponse {
                id: category.id().to_string(),
                label: category.label().to_string(),
                icon: category.icon().map(String::from),
                book_count: records
                    .iter()
                    .filter(|r| matches(category.id(), &r.genre))
                    .count(),
            })
            .collect()
    }
}

/// 拉取全量图书，失败时降级为空集
async fn fetch_all_or_empty(
    book_repo: &dyn BookRepositoryPort,
    context: &str,
) -> Vec<BookRecord> {
    match book_repo.find_all().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(
                context = %context,
                error = %e,
                "Book fetch failed, serving empty result"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::application::ports::RepositoryError;

    /// 固定图书列表的桩仓储
    struct StubBookRepository {
        books: Vec<BookRecord>,
    }

    #[async_trait]
    impl BookRepositoryPort for StubBookRepository {
        async fn save(&self, _book: &BookRecord) -> Result<(), RepositoryError> {
            unimplemented!("read-only stub")
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<BookRecord>, RepositoryError> {
            unimplemented!("read-only stub")
        }

        async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
            Ok(self.books.clone())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
            unimplemented!("read-only stub")
        }
    }

    /// 始终失败的桩仓储
    struct FailingBookRepository;

    #[async_trait]
    impl BookRepositoryPort for FailingBookRepository {
        async fn save(&self, _book: &BookRecord) -> Result<(), RepositoryError> {
            Err(RepositoryError::DatabaseError("disk on fire".into()))
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<BookRecord>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk on fire".into()))
        }

        async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk on fire".into()))
        }

        async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
            Err(RepositoryError::DatabaseError("disk on fire".into()))
        }
    }

    fn record(title: &str, genre: &str) -> BookRecord {
        let now = Utc::now();
        BookRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: "author".to_string(),
            genre: genre.to_string(),
            cover_url: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn handler_with(books: Vec<BookRecord>) -> GetCategoryBooksHandler {
        GetCategoryBooksHandler::new(
            Arc::new(StubBookRepository { books }),
            Arc::new(CategoryRegistry::with_defaults()),
        )
    }

    #[tokio::test]
    async fn test_category_page_filters_and_labels() {
        let handler = handler_with(vec![
            record("A Game of Thrones", "Fantasy"),
            record("Dracula", "Horror"),
            record("The Hobbit", "fantasy"),
        ]);

        let response = handler
            .handle(GetCategoryBooks {
                category_id: "fantasy".to_string(),
            })
            .await;

        assert_eq!(response.label, "Fantasy");
        assert_eq!(response.icon.as_deref(), Some("sparkles"));
        assert_eq!(response.total, 2);
        let titles: Vec<&str> = response.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A Game of Thrones", "The Hobbit"]);
    }

    #[tokio::test]
    async fn test_unknown_category_renders_with_raw_id() {
        let handler = handler_with(vec![record("Shane", "Western")]);

        let response = handler
            .handle(GetCategoryBooks {
                category_id: "western".to_string(),
            })
            .await;

        assert_eq!(response.label, "western");
        assert!(response.icon.is_none());
        assert_eq!(response.total, 1);
    }

    #[tokio::test]
    async fn test_repository_failure_degrades_to_empty() {
        let handler = GetCategoryBooksHandler::new(
            Arc::new(FailingBookRepository),
            Arc::new(CategoryRegistry::with_defaults()),
        );

        let response = handler
            .handle(GetCategoryBooks {
                category_id: "fantasy".to_string(),
            })
            .await;

        assert_eq!(response.total, 0);
        assert!(response.books.is_empty());
        // 降级后页面元数据照常可用
        assert_eq!(response.label, "Fantasy");
    }

    #[tokio::test]
    async fn test_list_categories_counts_per_category() {
        let repo = Arc::new(StubBookRepository {
            books: vec![
                record("Dune", "Science Fiction"),
                record("Gone Girl", "Thriller"),
                record("In Cold Blood", "True Crime"),
            ],
        });
        let handler =
            ListCategoriesHandler::new(repo, Arc::new(CategoryRegistry::with_defaults()));

        let summaries = handler.handle(ListCategories).await;
        let by_id = |id: &str| summaries.iter().find(|s| s.id == id).unwrap();

        // "Thriller" 是 "mystery-thriller" 的子串
        assert_eq!(by_id("mystery-thriller").book_count, 1);
        // "sci-fi" 与 "Science Fiction" 字面不包含，不匹配
        assert_eq!(by_id("sci-fi").book_count, 0);
        assert_eq!(by_id("romance").book_count, 0);
        assert_eq!(summaries.len(), CategoryRegistry::with_defaults().len());
    }

    #[tokio::test]
    async fn test_list_categories_degrades_to_zero_counts() {
        let handler = ListCategoriesHandler::new(
            Arc::new(FailingBookRepository),
            Arc::new(CategoryRegistry::with_defaults()),
        );

        let summaries = handler.handle(ListCategories).await;
        assert!(summaries.iter().all(|s| s.book_count == 0));
    }
}
