//! Integer product id taken from the `:id` path segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::config::MSG_INVALID_ID;
use crate::errors::AppError;

/// Path id parsed as an integer; anything else is `InvalidInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::invalid_input(MSG_INVALID_ID))?;

        raw.parse::<i32>()
            .map(ProductId)
            .map_err(|_| AppError::invalid_input(MSG_INVALID_ID))
    }
}
