//! Repository tests against a real database.
//!
//! These need a `DATABASE_URL` pointing at a Postgres server the test user
//! may create databases on. Run with `cargo test -p notekeeper-db -- --ignored`.

use assert_matches::assert_matches;
use chrono::Utc;
use notekeeper_core::entity::EntityKind;
use notekeeper_db::models::category::{CreateCategory, UpdateCategory};
use notekeeper_db::models::note::{CreateNote, UpdateNote};
use notekeeper_db::models::user::{CreateUser, UpdateUser};
use notekeeper_db::repositories::{CategoryRepo, NoteRepo, UserRepo};
use notekeeper_db::{EntityStore, PgStore, StoreError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(name: &str) -> CreateUser {
    CreateUser {
        username: name.to_string(),
        email: format!("{name}@example.com"),
        password_hash: "$argon2id$v=19$stub".to_string(),
    }
}

fn new_category(user_id: i64, name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        user_id,
    }
}

fn new_note(user_id: i64, category_id: i64, title: &str) -> CreateNote {
    CreateNote {
        title: title.to_string(),
        body: "milk".to_string(),
        user_id,
        category_id,
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Test: create and read back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore]
async fn test_create_full_hierarchy(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    assert_eq!(user.username, "alice");

    let category = CategoryRepo::create(&pool, &new_category(user.id, "Personal"))
        .await
        .unwrap();
    assert_eq!(category.user_id, user.id);

    let note = NoteRepo::create(&pool, &new_note(user.id, category.id, "Shop"))
        .await
        .unwrap();
    assert_eq!(note.category_id, category.id);
    assert!(note.modified_at.is_none());

    let found = NoteRepo::find_by_id(&pool, note.id).await.unwrap();
    assert_eq!(found, Some(note));
}

// ---------------------------------------------------------------------------
// Test: missing references are reported, nothing is written
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore]
async fn test_missing_references(pool: PgPool) {
    let result = CategoryRepo::create(&pool, &new_category(999, "Orphan")).await;
    assert_matches!(
        result,
        Err(StoreError::MissingReference { entity: EntityKind::User, id: 999 })
    );

    let user = UserRepo::create(&pool, &new_user("bobby")).await.unwrap();
    let result = NoteRepo::create(&pool, &new_note(user.id, 999, "x")).await;
    assert_matches!(
        result,
        Err(StoreError::MissingReference { entity: EntityKind::Category, id: 999 })
    );

    assert!(NoteRepo::list(&pool).await.unwrap().is_empty());
    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore]
async fn test_note_update_touches_only_target_field(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol")).await.unwrap();
    let category = CategoryRepo::create(&pool, &new_category(user.id, "Work"))
        .await
        .unwrap();
    let note = NoteRepo::create(&pool, &new_note(user.id, category.id, "Draft"))
        .await
        .unwrap();

    let update = UpdateNote {
        title: Some("Final".to_string()),
        ..UpdateNote::touch(Utc::now())
    };
    let updated = NoteRepo::update(&pool, note.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.body, note.body);
    assert_eq!(updated.category_id, note.category_id);
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.modified_at.is_some());

    let missing = NoteRepo::update(&pool, 12345, &UpdateNote::touch(Utc::now()))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore]
async fn test_user_and_category_updates(pool: PgPool) {
    let alice = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let bobby = UserRepo::create(&pool, &new_user("bobby")).await.unwrap();

    let renamed = UserRepo::update(
        &pool,
        alice.id,
        &UpdateUser {
            email: Some("alice@work.example".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.email, "alice@work.example");
    assert_eq!(renamed.username, "alice");

    let category = CategoryRepo::create(&pool, &new_category(alice.id, "Home"))
        .await
        .unwrap();
    let moved = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: "Chores".to_string(),
            user_id: bobby.id,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.name, "Chores");
    assert_eq!(moved.user_id, bobby.id);

    let result = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: "Lost".to_string(),
            user_id: 999,
        },
    )
    .await;
    assert_matches!(result, Err(StoreError::MissingReference { id: 999, .. }));
}

// ---------------------------------------------------------------------------
// Test: referenced rows cannot be deleted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore]
async fn test_referenced_delete_is_refused(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave1")).await.unwrap();
    let category = CategoryRepo::create(&pool, &new_category(user.id, "Work"))
        .await
        .unwrap();
    let note = NoteRepo::create(&pool, &new_note(user.id, category.id, "Todo"))
        .await
        .unwrap();

    assert_matches!(
        CategoryRepo::delete(&pool, category.id).await,
        Err(StoreError::StillReferenced { entity: EntityKind::Category, .. })
    );
    assert_matches!(
        UserRepo::delete(&pool, user.id).await,
        Err(StoreError::StillReferenced { entity: EntityKind::User, .. })
    );

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(CategoryRepo::delete(&pool, category.id).await.unwrap());
    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(!UserRepo::delete(&pool, user.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: store filter by category
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore]
async fn test_pg_store_filters_notes_by_category(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = store.insert_user(&new_user("erin1")).await.unwrap();
    let work = store
        .insert_category(&new_category(user.id, "Work"))
        .await
        .unwrap();
    let home = store
        .insert_category(&new_category(user.id, "Home"))
        .await
        .unwrap();
    store
        .insert_note(&new_note(user.id, work.id, "w1"))
        .await
        .unwrap();
    store
        .insert_note(&new_note(user.id, home.id, "h1"))
        .await
        .unwrap();

    let work_notes = store.list_notes(Some(work.id)).await.unwrap();
    assert_eq!(work_notes.len(), 1);
    assert_eq!(work_notes[0].title, "w1");
    assert_eq!(store.list_notes(None).await.unwrap().len(), 2);
    assert!(store.health_check().await.is_ok());
}
