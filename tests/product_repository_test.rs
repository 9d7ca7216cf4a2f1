//! Product repository tests against an in-memory SQLite store.

mod common;

use storage_api::domain::{NewProduct, Product};
use storage_api::errors::AppError;
use storage_api::infra::{ProductRepository, ProductStore};

fn cafe() -> NewProduct {
    NewProduct {
        name: "cafe".to_string(),
        product_type: "negro".to_string(),
        count: 1,
        price: 14.2,
        warehouse_id: 1,
    }
}

fn refresco() -> NewProduct {
    NewProduct {
        name: "Refresco".to_string(),
        product_type: "coca".to_string(),
        count: 5,
        price: 4561.0,
        warehouse_id: 1,
    }
}

async fn store() -> ProductStore {
    let db = common::test_database().await;
    ProductStore::new(db.get_connection())
}

#[tokio::test]
async fn store_assigns_distinct_positive_ids() {
    let repo = store().await;

    let first = repo.store(cafe()).await.unwrap();
    let second = repo.store(refresco()).await.unwrap();

    assert!(first.id > 0);
    assert!(second.id > 0);
    assert_ne!(first.id, second.id);
    assert_eq!(first, cafe().with_id(first.id));
    assert_eq!(second, refresco().with_id(second.id));
}

#[tokio::test]
async fn get_by_name_finds_stored_product() {
    let repo = store().await;
    let stored = repo.store(cafe()).await.unwrap();

    let found = repo.get_by_name("cafe").await.unwrap();

    assert_eq!(found, stored);
}

#[tokio::test]
async fn get_by_name_miss_returns_zero_record() {
    let repo = store().await;

    let found = repo.get_by_name("Azucar").await.unwrap();

    assert_eq!(found, Product::default());
}

#[tokio::test]
async fn get_by_name_treats_input_as_a_value() {
    let repo = store().await;
    repo.store(cafe()).await.unwrap();

    let found = repo.get_by_name("' OR '1'='1").await.unwrap();

    assert_eq!(found, Product::default());
}

#[tokio::test]
async fn get_all_lists_every_row() {
    let repo = store().await;
    assert!(repo.get_all().await.unwrap().is_empty());

    repo.store(cafe()).await.unwrap();
    repo.store(refresco()).await.unwrap();

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| p.id > 0));
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let repo = store().await;

    let result = repo.get_by_id(10).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn update_overwrites_all_columns() {
    let repo = store().await;
    let stored = repo.store(cafe()).await.unwrap();

    let changed = Product {
        id: stored.id,
        name: "Azucar".to_string(),
        product_type: "Morena".to_string(),
        count: 0,
        price: 0.0,
        warehouse_id: 2,
    };
    let returned = repo.update(changed.clone()).await.unwrap();

    assert_eq!(returned, changed);
    assert_eq!(repo.get_by_id(stored.id).await.unwrap(), changed);
}

#[tokio::test]
async fn update_of_missing_row_is_not_an_error() {
    let repo = store().await;

    let ghost = cafe().with_id(404);
    let returned = repo.update(ghost.clone()).await.unwrap();

    assert_eq!(returned, ghost);
    assert!(matches!(repo.get_by_id(404).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_removes_row_once() {
    let repo = store().await;
    let stored = repo.store(cafe()).await.unwrap();

    repo.delete(stored.id).await.unwrap();

    assert!(matches!(repo.get_by_id(stored.id).await, Err(AppError::NotFound)));
    assert!(matches!(repo.delete(stored.id).await, Err(AppError::NotFound)));
}
