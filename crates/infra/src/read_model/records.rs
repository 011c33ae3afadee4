//! Read-only projections of the document chain.
//!
//! These are the shapes the lineage subsystem consumes; the full entities
//! live with the (out-of-scope) CRUD modules. Money is integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressroom_core::{ExpenseOrderId, OrderId, QuoteId, WorkOrderId};
use pressroom_documents::{ExpenseOrderStatus, OrderStatus, QuoteStatus, WorkOrderStatus};

/// Quote (COT) projection. `order_id` is None until (unless) the quote is
/// converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: QuoteId,
    pub number: String,
    pub status: QuoteStatus,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub client_name: String,
    /// Commercial channel the quote came through, when recorded.
    pub channel_name: Option<String>,
    pub order_id: Option<OrderId>,
}

/// Order (OP) projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub number: String,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub balance_cents: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub client_name: String,
}

/// Work Order (OT) projection. Always owned by exactly one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderRecord {
    pub id: WorkOrderId,
    pub number: String,
    pub status: WorkOrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order_id: OrderId,
    pub advisor_name: String,
    pub designer_name: Option<String>,
}

/// Expense Order (OG) projection. `work_order_id` is None when the work
/// order was later disassociated (the orphan case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseOrderRecord {
    pub id: ExpenseOrderId,
    pub number: String,
    pub status: ExpenseOrderStatus,
    pub created_at: DateTime<Utc>,
    pub work_order_id: Option<WorkOrderId>,
    /// Per-line-item totals; the displayed total is their sum.
    pub line_totals_cents: Vec<i64>,
}

impl ExpenseOrderRecord {
    pub fn line_total_cents(&self) -> i64 {
        self.line_totals_cents.iter().sum()
    }
}

/// A work order with its expense orders, as loaded by the composite read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderTree {
    pub work_order: WorkOrderRecord,
    /// Creation time ascending.
    pub expense_orders: Vec<ExpenseOrderRecord>,
}

/// The full hierarchy reachable from one order, loaded in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTree {
    pub order: OrderRecord,
    pub quote: Option<QuoteRecord>,
    /// Creation time ascending.
    pub work_orders: Vec<WorkOrderTree>,
}

/// Expense order together with its work order's owning order id, resolved in
/// one read so the lineage resolver needs a single round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseOrderAnchor {
    pub record: ExpenseOrderRecord,
    pub order_id: Option<OrderId>,
}

/// One row of a per-type free-text search.
///
/// `client_name` is None when no client is resolvable (orphan expense
/// orders); the presentation layer substitutes its placeholder label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: Uuid,
    pub number: String,
    pub status: String,
    pub client_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
