//! Query Handlers

mod book_handlers;
mod category_handlers;

pub use book_handlers::{BookResponse, GetBookHandler, ListBooksHandler};
pub use category_handlers::{
    CategoryBooksResponse, CategorySummaryResponse, GetCategoryBooksHandler,
    ListCategoriesHandler,
};
