use async_trait::async_trait;
use thiserror::Error;

use pressroom_core::{ExpenseOrderId, OrderId, QuoteId, WorkOrderId};

use crate::read_model::records::{
    ExpenseOrderAnchor, OrderTree, QuoteRecord, SearchHit, WorkOrderRecord,
};

/// Failure of the underlying read-model backend.
///
/// Propagated unchanged to the caller: lineage reads are idempotent, so any
/// retry policy belongs to the HTTP client, not this subsystem.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read model backend failed: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Read contract of the persistence layer for the document chain.
///
/// Lookups return `Ok(None)` for missing ids; `Err` is reserved for backend
/// failures. `order_tree` is deliberately composite: one call loads the order
/// with its optional quote, all work orders and their expense orders, so a
/// lineage request has no multi-step traversal to interleave.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn quote(&self, id: QuoteId) -> Result<Option<QuoteRecord>, StoreError>;

    async fn work_order(&self, id: WorkOrderId) -> Result<Option<WorkOrderRecord>, StoreError>;

    /// Expense order joined with its work order's owning order id.
    async fn expense_order_anchor(
        &self,
        id: ExpenseOrderId,
    ) -> Result<Option<ExpenseOrderAnchor>, StoreError>;

    /// The full hierarchy anchored at `id`, nested relations included.
    async fn order_tree(&self, id: OrderId) -> Result<Option<OrderTree>, StoreError>;

    /// Per-type searches: case-insensitive match on document number or
    /// (transitively resolved) client name, creation time descending, at most
    /// `limit` rows.
    async fn search_quotes(&self, term: &str, limit: usize) -> Result<Vec<SearchHit>, StoreError>;

    async fn search_orders(&self, term: &str, limit: usize) -> Result<Vec<SearchHit>, StoreError>;

    async fn search_work_orders(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, StoreError>;

    async fn search_expense_orders(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, StoreError>;
}
