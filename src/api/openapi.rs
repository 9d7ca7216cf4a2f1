//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::product_handler::{CreateProductRequest, UpdateProductRequest};
use crate::domain::Product;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::product_handler::get_product_by_name,
        crate::api::handlers::product_handler::get_product,
        crate::api::handlers::product_handler::list_products,
        crate::api::handlers::product_handler::create_product,
        crate::api::handlers::product_handler::update_product,
        crate::api::handlers::product_handler::delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            UpdateProductRequest,
        )
    ),
    tags(
        (name = "Products", description = "Product storage endpoints"),
    )
)]
pub struct ApiDoc;
