//! Product handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ProductId, ValidatedJson};
use crate::api::AppState;
use crate::config::{MSG_INVALID_NAME, MSG_NO_CHANGES};
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent};

/// Product creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre cannot be empty"))]
    #[schema(example = "cafe")]
    pub name: String,
    #[serde(rename = "tipo")]
    #[schema(example = "negro")]
    pub product_type: String,
    #[serde(rename = "cantidad")]
    #[validate(range(min = 0, message = "cantidad cannot be negative"))]
    #[schema(example = 1)]
    pub count: i32,
    #[serde(rename = "precio")]
    #[validate(range(min = 0.0, message = "precio cannot be negative"))]
    #[schema(example = 14.2)]
    pub price: f64,
    #[serde(rename = "id_warehouse")]
    #[schema(example = 1)]
    pub warehouse_id: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            product_type: req.product_type,
            count: req.count,
            price: req.price,
            warehouse_id: req.warehouse_id,
        }
    }
}

/// Partial product update; omitted fields keep their stored value
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    #[schema(example = "cafe")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type cannot be empty"))]
    pub product_type: Option<String>,
    #[validate(range(min = 0, message = "count cannot be negative"))]
    pub count: Option<i32>,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
    #[serde(rename = "warehouseId")]
    pub warehouse_id: Option<i32>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        ProductPatch {
            name: req.name,
            product_type: req.product_type,
            count: req.count,
            price: req.price,
            warehouse_id: req.warehouse_id,
        }
    }
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route("/products/name/", get(reject_empty_name))
        .route("/products/name/:name", get(get_product_by_name))
        .route(
            "/products/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// Get product by name
#[utoipa::path(
    get,
    path = "/products/name/{name}",
    tag = "Products",
    params(
        ("name" = String, Path, description = "Product name")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Empty name"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Product>> {
    if name.is_empty() {
        return Err(AppError::invalid_input(MSG_INVALID_NAME));
    }

    let product = state.product_service.get_by_name(&name).await?;
    Ok(Json(product))
}

/// `/products/name/` with nothing after the slash
async fn reject_empty_name() -> AppError {
    AppError::invalid_input(MSG_INVALID_NAME)
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses(
        (status = 200, description = "All stored products", body = Vec<Product>),
        (status = 400, description = "Store error"),
        (status = 404, description = "No products stored")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.get_all().await.map_err(|e| {
        tracing::warn!("Listing products failed: {:?}", e);
        AppError::invalid_input(e.user_message())
    })?;

    if products.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products/",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 409, description = "Store rejected the product"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Created<Product>> {
    let product = state
        .product_service
        .save(payload.into())
        .await
        .map_err(|e| {
            tracing::warn!("Creating product failed: {:?}", e);
            AppError::conflict("product could not be created")
        })?;

    tracing::info!(id = product.id, "Product created");
    Ok(Created(product))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid id, malformed body, or no changes"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    payload: Result<ValidatedJson<UpdateProductRequest>, AppError>,
) -> AppResult<Json<Product>> {
    let ValidatedJson(payload) =
        payload.map_err(|e| AppError::invalid_input(e.user_message()))?;
    let patch = ProductPatch::from(payload);
    if patch.is_empty() {
        return Err(AppError::invalid_input(MSG_NO_CHANGES));
    }

    // Reject null updates before touching the store again
    let existing = state.product_service.get_by_id(id).await?;
    if existing.is_unchanged_by(&patch) {
        return Err(AppError::invalid_input(MSG_NO_CHANGES));
    }

    let product = state
        .product_service
        .update(id, patch)
        .await
        .map_err(|e| match e {
            AppError::NotFound => AppError::NotFound,
            other => {
                tracing::warn!(id, "Updating product failed: {:?}", other);
                AppError::invalid_input(other.user_message())
            }
        })?;

    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<NoContent> {
    state.product_service.delete(id).await?;

    tracing::info!(id, "Product deleted");
    Ok(NoContent)
}
