//! Document read-model storage abstractions.

pub mod in_memory;
pub mod records;
pub mod store;

pub use in_memory::InMemoryDocumentStore;
pub use records::{
    ExpenseOrderAnchor, ExpenseOrderRecord, OrderRecord, OrderTree, QuoteRecord, SearchHit,
    WorkOrderRecord, WorkOrderTree,
};
pub use store::{DocumentStore, StoreError};
