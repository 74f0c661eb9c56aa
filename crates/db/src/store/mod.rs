//! The entity store abstraction.
//!
//! [`EntityStore`] is what the HTTP layer talks to. Two implementations
//! exist: [`PgStore`] over the repository layer and [`MemoryStore`] for
//! local development and tests. Both enforce the same contract:
//!
//! - inserts and updates that carry a foreign id check the reference and
//!   write in one atomic step, returning [`StoreError::MissingReference`]
//!   when the referenced row is absent;
//! - deletes of rows that are still referenced return
//!   [`StoreError::StillReferenced`] and change nothing;
//! - lookups of unknown ids return `None` / `false`, never an error.
//!
//! [`StoreError::MissingReference`]: crate::error::StoreError::MissingReference
//! [`StoreError::StillReferenced`]: crate::error::StoreError::StillReferenced

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use notekeeper_core::types::DbId;

use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, UpdateUser, User};

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Cheap liveness probe used by `/health`.
    async fn health_check(&self) -> StoreResult<()>;

    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>>;
    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User>;
    async fn update_user(&self, id: DbId, input: &UpdateUser) -> StoreResult<Option<User>>;
    async fn delete_user(&self, id: DbId) -> StoreResult<bool>;

    async fn list_categories(&self) -> StoreResult<Vec<Category>>;
    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>>;
    async fn category_exists(&self, id: DbId) -> StoreResult<bool>;
    async fn insert_category(&self, input: &CreateCategory) -> StoreResult<Category>;
    async fn update_category(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>>;
    async fn delete_category(&self, id: DbId) -> StoreResult<bool>;

    /// All notes, or only those filed under `category_id` when given.
    async fn list_notes(&self, category_id: Option<DbId>) -> StoreResult<Vec<Note>>;
    async fn find_note(&self, id: DbId) -> StoreResult<Option<Note>>;
    async fn insert_note(&self, input: &CreateNote) -> StoreResult<Note>;
    async fn update_note(&self, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>>;
    async fn delete_note(&self, id: DbId) -> StoreResult<bool>;
}
