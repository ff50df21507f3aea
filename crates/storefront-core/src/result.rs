use crate::error::StorefrontError;

pub type StorefrontResult<T> = Result<T, StorefrontError>;
