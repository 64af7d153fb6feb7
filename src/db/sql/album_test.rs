//! Tests for SqlAlbumRepository.

use sqlx::Row;

use crate::db::{AlbumRepository, Database, DbError, NewAlbum, SqlDatabase};

async fn setup_db() -> SqlDatabase {
    SqlDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database")
}

fn blue_train() -> NewAlbum {
    NewAlbum {
        title: "Blue Train".to_string(),
        artist: "John Coltrane".to_string(),
        price: 56.99,
    }
}

async fn row_count(db: &SqlDatabase) -> i64 {
    let row = db
        .query_one(sqlx::query("SELECT COUNT(*) AS total FROM album"))
        .await
        .expect("Count should succeed")
        .expect("Count returns a row");
    row.get("total")
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_album() {
    let db = setup_db().await;
    let repo = db.albums();

    let created = repo.create(&blue_train()).await.expect("Create should succeed");
    assert!(created.id > 0);
    assert_eq!(created.title, "Blue Train");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_distinct_ids() {
    let db = setup_db().await;
    let repo = db.albums();

    let first = repo.create(&blue_train()).await.unwrap();
    let second = repo.create(&blue_train()).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_generated_ids_in_order() {
    let db = setup_db().await;
    let repo = db.albums();

    let first = repo.create(&blue_train()).await.expect("Create should succeed");
    let second = repo.create(&blue_train()).await.expect("Create should succeed");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.get(2).await.unwrap(), second);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_album_returns_not_found() {
    let db = setup_db().await;

    let result = db.albums().get(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_albums_in_id_order() {
    let db = setup_db().await;
    let repo = db.albums();

    assert!(repo.list().await.unwrap().is_empty());

    let jeru = NewAlbum {
        title: "Jeru".to_string(),
        artist: "Gerry Mulligan".to_string(),
        price: 17.99,
    };
    let a = repo.create(&blue_train()).await.unwrap();
    let b = repo.create(&jeru).await.unwrap();

    let albums = repo.list().await.expect("List should succeed");
    assert_eq!(albums, vec![a, b]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_fields() {
    let db = setup_db().await;
    let repo = db.albums();
    let created = repo.create(&blue_train()).await.unwrap();

    let changes = NewAlbum {
        title: "Blue Train (Remastered)".to_string(),
        artist: "John Coltrane".to_string(),
        price: 24.5,
    };
    let affected = repo.update(created.id, &changes).await.unwrap();
    assert_eq!(affected, 1);

    let updated = repo.get(created.id).await.unwrap();
    assert_eq!(updated, changes.with_id(created.id));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_nonexistent_album_affects_no_rows() {
    let db = setup_db().await;

    let affected = db.albums().update(12345, &blue_train()).await.unwrap();
    assert_eq!(affected, 0);
    assert_eq!(row_count(&db).await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_removed_album() {
    let db = setup_db().await;
    let repo = db.albums();
    let created = repo.create(&blue_train()).await.unwrap();

    let deleted = repo.delete(created.id).await.expect("Delete should succeed");
    assert_eq!(deleted, created);

    let result = repo.get(created.id).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
    assert_eq!(row_count(&db).await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_nonexistent_album_returns_not_found() {
    let db = setup_db().await;
    let repo = db.albums();
    repo.create(&blue_train()).await.unwrap();

    let result = repo.delete(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
    assert_eq!(row_count(&db).await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn statement_failures_surface_as_database_errors() {
    let db = setup_db().await;
    db.exec(sqlx::query("DROP TABLE album")).await.unwrap();
    let repo = db.albums();

    assert!(matches!(repo.list().await, Err(DbError::Database { .. })));
    assert!(matches!(
        repo.create(&blue_train()).await,
        Err(DbError::Database { .. })
    ));
    assert!(matches!(
        repo.update(1, &blue_train()).await,
        Err(DbError::Database { .. })
    ));
}
