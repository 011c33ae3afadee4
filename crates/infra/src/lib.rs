//! `pressroom-infra` — read contracts of the persistence layer.
//!
//! The lineage subsystem never writes; everything it needs from storage is
//! expressed as the [`read_model::DocumentStore`] trait plus the record types
//! it returns. `InMemoryDocumentStore` backs dev and tests; a real backend
//! implements the same trait behind the same composite reads.

pub mod read_model;

pub use read_model::{
    DocumentStore, ExpenseOrderAnchor, ExpenseOrderRecord, InMemoryDocumentStore, OrderRecord,
    OrderTree, QuoteRecord, SearchHit, StoreError, WorkOrderRecord, WorkOrderTree,
};
