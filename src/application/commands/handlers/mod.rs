//! Command Handlers

mod book_handlers;

pub use book_handlers::{
    DeleteBookHandler, DeleteBookResponse, RegisterBookHandler, RegisterBookResponse,
};
