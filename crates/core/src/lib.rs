//! Domain types, errors and field rules shared by the store and the API.

pub mod category;
pub mod entity;
pub mod error;
pub mod note;
pub mod types;
pub mod user;
pub mod validation;
