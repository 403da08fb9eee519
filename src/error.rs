//! Favorites Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FavoritesError {
    /// fetch rejected or a browser call threw
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Request was redirected to the login page
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("favorite form is missing {0}")]
    MissingField(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type FavoritesResult<T> = Result<T, FavoritesError>;

impl From<serde_json::Error> for FavoritesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FavoritesError::Status(500).to_string(), "unexpected HTTP status 500");
        assert_eq!(
            FavoritesError::MissingField("data-product-slug").to_string(),
            "favorite form is missing data-product-slug"
        );
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: FavoritesError = serde_json::from_str::<u64>("\"x\"").unwrap_err().into();
        assert!(matches!(err, FavoritesError::Decode(_)));
    }
}
