//! Product repository implementation.
//!
//! One statement per operation; every statement is built by SeaORM with
//! bound parameters. Dropping a returned future aborts its statement.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Surfaces raw store errors; holds no business rules.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// First product with this name, or the all-zero `Product` when none
    /// matches. A miss is not an error at this layer.
    async fn get_by_name(&self, name: &str) -> AppResult<Product>;

    /// Insert a product and return it with the store-assigned id
    async fn store(&self, product: NewProduct) -> AppResult<Product>;

    /// Every stored product
    async fn get_all(&self) -> AppResult<Vec<Product>>;

    /// Product by id, `NotFound` if absent
    async fn get_by_id(&self, id: i32) -> AppResult<Product>;

    /// Overwrite every column of the row with `product.id`.
    ///
    /// Matching zero rows is not reported.
    async fn update(&self, product: Product) -> AppResult<Product>;

    /// Delete by id, `NotFound` if nothing was deleted
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn get_by_name(&self, name: &str) -> AppResult<Product> {
        tracing::debug!(name, "Looking up product by name");

        let result = ProductEntity::find()
            .filter(product::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from).unwrap_or_default())
    }

    async fn store(&self, new_product: NewProduct) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(new_product.name.clone()),
            product_type: Set(new_product.product_type.clone()),
            count: Set(new_product.count),
            price: Set(new_product.price),
            warehouse_id: Set(new_product.warehouse_id),
        };

        let result = ProductEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(id = result.last_insert_id, "Product stored");
        Ok(new_product.with_id(result.last_insert_id))
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Product::from)
            .ok_or_not_found()
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let changes = ActiveModel {
            id: NotSet,
            name: Set(product.name.clone()),
            product_type: Set(product.product_type.clone()),
            count: Set(product.count),
            price: Set(product.price),
            warehouse_id: Set(product.warehouse_id),
        };

        let result = ProductEntity::update_many()
            .set(changes)
            .filter(product::Column::Id.eq(product.id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(id = product.id, "Update matched no rows");
        }

        Ok(product)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
