//! Domain layer - Core business entities and logic
//!
//! Contains the product record and the partial-update merge rule.
//! No infrastructure dependencies.

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
