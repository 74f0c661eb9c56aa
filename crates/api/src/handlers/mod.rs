//! Request handlers for users, categories and notes.
//!
//! Handlers parse the request, call into [`crate::linker`] and wrap the result
//! in an [`ApiResponse`](crate::response::ApiResponse). Errors map through
//! [`AppError`](crate::error::AppError).

pub mod category;
pub mod note;
pub mod user;
