use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text term matched against document numbers and client names.
    pub q: String,
    /// Per-document-type result cap; defaults to 20.
    pub limit: Option<usize>,
}
