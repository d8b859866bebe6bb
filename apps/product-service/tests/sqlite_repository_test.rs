//! SQLite repository behavior against a temporary database file.

use product_service::domain::product::{Product, ProductRepository};
use product_service::infrastructure::persistence::SqliteProductRepository;
use tempfile::TempDir;

async fn make_repository() -> (SqliteProductRepository, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite:{}", temp_dir.path().join("test.db").display());
    let repository = SqliteProductRepository::connect(&database_url, 5)
        .await
        .unwrap();
    (repository, temp_dir)
}

#[tokio::test]
async fn insert_assigns_generated_id() {
    let (repo, _db) = make_repository().await;

    let saved = repo.save(&Product::new("Widget", 9.99)).await.unwrap();

    assert_eq!(saved.id, Some(1));
    assert_eq!(saved.name, "Widget");

    let second = repo.save(&Product::new("Gadget", 1.0)).await.unwrap();
    assert_eq!(second.id, Some(2));
}

#[tokio::test]
async fn find_by_id_roundtrip() {
    let (repo, _db) = make_repository().await;
    let saved = repo.save(&Product::new("Widget", 9.99)).await.unwrap();

    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap();

    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn find_by_id_absent_is_none() {
    let (repo, _db) = make_repository().await;

    let found = repo.find_by_id(42).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn save_with_id_overwrites_name_and_price() {
    let (repo, _db) = make_repository().await;
    let saved = repo.save(&Product::new("Widget", 9.99)).await.unwrap();

    let mut changed = saved.clone();
    changed.name = "Gadget".to_string();
    changed.price = 12.5;
    repo.save(&changed).await.unwrap();

    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.name, "Gadget");
    assert_eq!(found.price, 12.5);
    assert_eq!(found.id, saved.id);
}

#[tokio::test]
async fn save_with_unknown_id_leaves_store_unchanged() {
    let (repo, _db) = make_repository().await;

    let ghost = Product {
        id: Some(42),
        name: "Ghost".to_string(),
        price: 1.0,
    };
    repo.save(&ghost).await.unwrap();

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (repo, _db) = make_repository().await;
    let saved = repo.save(&Product::new("Widget", 9.99)).await.unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    // Deleting again still succeeds.
    repo.delete_by_id(id).await.unwrap();
}

#[tokio::test]
async fn find_all_in_primary_key_order() {
    let (repo, _db) = make_repository().await;
    repo.save(&Product::new("First", 1.0)).await.unwrap();
    repo.save(&Product::new("Second", 2.0)).await.unwrap();
    repo.save(&Product::new("Third", 3.0)).await.unwrap();

    let all = repo.find_all().await.unwrap();

    assert_eq!(all.len(), 3);
    let ids: Vec<i64> = all.iter().map(|p| p.id.unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let (repo, _db) = make_repository().await;
    repo.save(&Product::new("Widget", 9.99)).await.unwrap();

    // Running schema setup again must not disturb existing rows.
    repo.migrate().await.unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}
