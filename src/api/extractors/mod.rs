//! Custom extractors that reject with `AppError`.

mod product_id;
mod validated_json;

pub use product_id::ProductId;
pub use validated_json::ValidatedJson;
