//! Shared response shapes.

use serde::Deserialize;

/// Error body returned by the API: `{"error": "..."}`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
