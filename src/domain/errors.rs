use thiserror::Error;

/// Everything that can go wrong between mounting the view and showing products.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The catalog answered with a non-2xx status.
    #[error("catalog responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not a list of products.
    #[error("malformed catalog payload: {0}")]
    Decode(String),

    /// A required browser API or DOM node was missing.
    #[error("browser API unavailable: {0}")]
    Browser(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
