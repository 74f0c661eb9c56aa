use std::collections::BTreeMap;

use async_trait::async_trait;
use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::{describe_dependents, StoreError, StoreResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::store::EntityStore;

/// In-process [`EntityStore`].
///
/// All three tables sit behind one lock, so a reference check and the write
/// that depends on it always happen under the same write guard.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<DbId, User>,
    categories: BTreeMap<DbId, Category>,
    notes: BTreeMap<DbId, Note>,
    last_user_id: DbId,
    last_category_id: DbId,
    last_note_id: DbId,
}

impl Tables {
    fn require_user(&self, id: DbId) -> StoreResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::MissingReference {
                entity: EntityKind::User,
                id,
            })
        }
    }

    fn require_category(&self, id: DbId) -> StoreResult<()> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::MissingReference {
                entity: EntityKind::Category,
                id,
            })
        }
    }
}

/// Advance a per-table sequence. Ids start at 1 and are never reused.
fn next_id(last: &mut DbId) -> DbId {
    *last += 1;
    *last
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.last_user_id);
        let user = User {
            id,
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: chrono::Utc::now(),
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: DbId, input: &UpdateUser) -> StoreResult<Option<User>> {
        let mut tables = self.tables.write().await;
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(username) = &input.username {
            user.username = username.clone();
        }
        if let Some(email) = &input.email {
            user.email = email.clone();
        }
        if let Some(password_hash) = &input.password_hash {
            user.password_hash = password_hash.clone();
        }
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Ok(false);
        }

        let notes = tables.notes.values().filter(|n| n.user_id == id).count() as i64;
        let categories = tables
            .categories
            .values()
            .filter(|c| c.user_id == id)
            .count() as i64;
        if notes > 0 || categories > 0 {
            return Err(StoreError::StillReferenced {
                entity: EntityKind::User,
                id,
                dependents: describe_dependents(&[
                    (notes, "note", "notes"),
                    (categories, "category", "categories"),
                ]),
            });
        }

        tables.users.remove(&id);
        Ok(true)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn category_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.read().await.categories.contains_key(&id))
    }

    async fn insert_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let mut tables = self.tables.write().await;
        tables.require_user(input.user_id)?;

        let id = next_id(&mut tables.last_category_id);
        let category = Category {
            id,
            name: input.name.clone(),
            user_id: input.user_id,
        };
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&id) {
            return Ok(None);
        }
        tables.require_user(input.user_id)?;

        let Some(category) = tables.categories.get_mut(&id) else {
            return Ok(None);
        };
        category.name = input.name.clone();
        category.user_id = input.user_id;
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&id) {
            return Ok(false);
        }

        let notes = tables
            .notes
            .values()
            .filter(|n| n.category_id == id)
            .count() as i64;
        if notes > 0 {
            return Err(StoreError::StillReferenced {
                entity: EntityKind::Category,
                id,
                dependents: describe_dependents(&[(notes, "note", "notes")]),
            });
        }

        tables.categories.remove(&id);
        Ok(true)
    }

    async fn list_notes(&self, category_id: Option<DbId>) -> StoreResult<Vec<Note>> {
        let tables = self.tables.read().await;
        Ok(tables
            .notes
            .values()
            .filter(|n| category_id.map_or(true, |c| n.category_id == c))
            .cloned()
            .collect())
    }

    async fn find_note(&self, id: DbId) -> StoreResult<Option<Note>> {
        Ok(self.tables.read().await.notes.get(&id).cloned())
    }

    async fn insert_note(&self, input: &CreateNote) -> StoreResult<Note> {
        let mut tables = self.tables.write().await;
        tables.require_user(input.user_id)?;
        tables.require_category(input.category_id)?;

        let id = next_id(&mut tables.last_note_id);
        let note = Note {
            id,
            title: input.title.clone(),
            body: input.body.clone(),
            created_at: input.created_at,
            modified_at: None,
            user_id: input.user_id,
            category_id: input.category_id,
        };
        tables.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>> {
        let mut tables = self.tables.write().await;
        if !tables.notes.contains_key(&id) {
            return Ok(None);
        }
        if let Some(category_id) = input.category_id {
            tables.require_category(category_id)?;
        }

        let Some(note) = tables.notes.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = &input.title {
            note.title = title.clone();
        }
        if let Some(body) = &input.body {
            note.body = body.clone();
        }
        if let Some(category_id) = input.category_id {
            note.category_id = category_id;
        }
        note.modified_at = Some(input.modified_at);
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.notes.remove(&id).is_some())
    }
}
