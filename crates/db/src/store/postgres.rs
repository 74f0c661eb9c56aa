use async_trait::async_trait;
use notekeeper_core::types::DbId;

use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::{CategoryRepo, NoteRepo, UserRepo};
use crate::store::EntityStore;
use crate::DbPool;

/// [`EntityStore`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn update_user(&self, id: DbId, input: &UpdateUser) -> StoreResult<Option<User>> {
        Ok(UserRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        UserRepo::delete(&self.pool, id).await
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn category_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(CategoryRepo::exists(&self.pool, id).await?)
    }

    async fn insert_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        CategoryRepo::create(&self.pool, input).await
    }

    async fn update_category(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        CategoryRepo::update(&self.pool, id, input).await
    }

    async fn delete_category(&self, id: DbId) -> StoreResult<bool> {
        CategoryRepo::delete(&self.pool, id).await
    }

    async fn list_notes(&self, category_id: Option<DbId>) -> StoreResult<Vec<Note>> {
        let notes = match category_id {
            Some(category_id) => NoteRepo::list_by_category(&self.pool, category_id).await?,
            None => NoteRepo::list(&self.pool).await?,
        };
        Ok(notes)
    }

    async fn find_note(&self, id: DbId) -> StoreResult<Option<Note>> {
        Ok(NoteRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_note(&self, input: &CreateNote) -> StoreResult<Note> {
        NoteRepo::create(&self.pool, input).await
    }

    async fn update_note(&self, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>> {
        NoteRepo::update(&self.pool, id, input).await
    }

    async fn delete_note(&self, id: DbId) -> StoreResult<bool> {
        Ok(NoteRepo::delete(&self.pool, id).await?)
    }
}
