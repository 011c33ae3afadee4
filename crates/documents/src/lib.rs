//! `pressroom-documents` — document statuses and the authoritative
//! status transition tables.
//!
//! The document chain is Quote (COT) → Order (OP) → Work Order (OT) →
//! Expense Order (OG). Each document type carries a closed status enum;
//! Quote and Order additionally carry an explicit transition table that
//! every status mutation elsewhere in the system must consult.

pub mod expense_order;
pub mod order;
pub mod quote;
pub mod work_order;

pub use expense_order::ExpenseOrderStatus;
pub use order::OrderStatus;
pub use quote::QuoteStatus;
pub use work_order::WorkOrderStatus;
