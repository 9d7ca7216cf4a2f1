//! Application services layer - Use cases and business logic.
//!
//! Services sit between HTTP handlers and repositories. They depend on
//! repository traits so alternate persistence backends can be injected.

mod product_service;

pub use product_service::{ProductManager, ProductService};
