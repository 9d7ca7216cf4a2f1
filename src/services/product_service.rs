//! Product service - Existence checks, merge-on-update, error translation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Product by name; any lookup failure or a miss is `NotFound`
    async fn get_by_name(&self, name: &str) -> AppResult<Product>;

    /// Product by id; any lookup failure is `NotFound`
    async fn get_by_id(&self, id: i32) -> AppResult<Product>;

    /// Persist a new product and return it with its assigned id
    async fn save(&self, product: NewProduct) -> AppResult<Product>;

    /// All stored products
    async fn get_all(&self) -> AppResult<Vec<Product>>;

    /// Merge `patch` into the stored product `id` and persist the result
    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<Product>;

    /// Delete product `id`
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProductService using a repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    async fn load(&self, id: i32) -> AppResult<Product> {
        self.repo.get_by_id(id).await.map_err(|e| {
            tracing::warn!(id, error = %e, "Product lookup failed");
            AppError::NotFound
        })
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn get_by_name(&self, name: &str) -> AppResult<Product> {
        let product = self.repo.get_by_name(name).await.map_err(|e| {
            tracing::warn!(name, error = %e, "Product lookup failed");
            AppError::NotFound
        })?;

        // The repository reports a miss as the zero record
        if product.is_blank() {
            return Err(AppError::NotFound);
        }

        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        self.load(id).await
    }

    async fn save(&self, product: NewProduct) -> AppResult<Product> {
        self.repo.store(product).await
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        self.repo.get_all().await
    }

    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<Product> {
        let existing = self.load(id).await?;
        let merged = existing.merged(&patch);

        self.repo.update(merged).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockProductRepository;
    use mockall::predicate::eq;

    fn create_test_product(id: i32) -> Product {
        Product {
            id,
            name: "cafe".to_string(),
            product_type: "negro".to_string(),
            count: 1,
            price: 14.2,
            warehouse_id: 1,
        }
    }

    fn service(repo: MockProductRepository) -> ProductManager {
        ProductManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_by_name_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_name()
            .withf(|name| name == "cafe")
            .returning(|_| Ok(create_test_product(3)));

        let product = service(repo).get_by_name("cafe").await.unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "cafe");
    }

    #[tokio::test]
    async fn test_get_by_name_zero_record_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_name()
            .returning(|_| Ok(Product::default()));

        let result = service(repo).get_by_name("missing").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_by_name_store_error_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_name()
            .returning(|_| Err(AppError::internal("connection reset")));

        let result = service(repo).get_by_name("cafe").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_by_id_translates_any_failure() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(42))
            .returning(|_| Err(AppError::internal("timeout")));

        let result = service(repo).get_by_id(42).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_returns_assigned_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_store()
            .times(1)
            .returning(|new_product| Ok(new_product.with_id(11)));

        let input = NewProduct {
            name: "cafe".to_string(),
            product_type: "negro".to_string(),
            count: 1,
            price: 14.2,
            warehouse_id: 1,
        };
        let saved = service(repo).save(input.clone()).await.unwrap();

        assert_eq!(saved, input.with_id(11));
    }

    #[tokio::test]
    async fn test_save_passes_store_errors_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_store()
            .returning(|_| Err(AppError::Database(sea_orm::DbErr::Custom("dup".into()))));

        let result = service(repo)
            .save(NewProduct {
                name: "cafe".to_string(),
                product_type: "negro".to_string(),
                count: 1,
                price: 1.0,
                warehouse_id: 1,
            })
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_update_merges_onto_stored_record() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(5))
            .returning(|id| Ok(create_test_product(id)));
        repo.expect_update()
            .withf(|p| {
                p.id == 5
                    && p.name == "cafe de olla"
                    && p.product_type == "negro"
                    && p.count == 1
                    && p.price == 14.2
                    && p.warehouse_id == 1
            })
            .times(1)
            .returning(Ok);

        let patch = ProductPatch {
            name: Some("cafe de olla".to_string()),
            ..Default::default()
        };
        let updated = service(repo).update(5, patch).await.unwrap();

        assert_eq!(updated.name, "cafe de olla");
        assert_eq!(updated.count, 1);
        assert_eq!(updated.price, 14.2);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_update().never();

        let result = service(repo)
            .update(
                99,
                ProductPatch {
                    count: Some(2),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_passes_not_found_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .with(eq(8))
            .returning(|_| Err(AppError::NotFound));

        let result = service(repo).delete(8).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_all_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![create_test_product(1), create_test_product(2)]));

        let products = service(repo).get_all().await.unwrap();

        assert_eq!(products.len(), 2);
    }
}
