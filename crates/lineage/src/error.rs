use thiserror::Error;

use pressroom_infra::StoreError;

pub type LineageResult<T> = Result<T, LineageError>;

/// Failure of a lineage read.
///
/// The orphan conditions are deliberately *not* here — they are ordinary
/// [`crate::Resolution`] variants, visible in the resolver's signature, and
/// they render as valid one-node timelines. `NotFound` is fatal to the
/// request; `Store` failures propagate unchanged (reads are idempotent, any
/// retry belongs to the HTTP client).
#[derive(Debug, Error)]
pub enum LineageError {
    #[error("document not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
