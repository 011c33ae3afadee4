//! `pressroom-lineage` — document lineage reconstruction.
//!
//! Given any document in the Quote → Order → Work Order → Expense Order
//! chain, this crate resolves the owning order, loads the full hierarchy in
//! one composite read and materializes it as a navigable node/edge tree with
//! a focused node. The two orphan shapes (a quote that never converted, an
//! expense order detached from its work order) come back as valid one-node
//! timelines, not errors. A concurrent cross-type search feeds the entry
//! point of that flow.

pub mod builder;
pub mod error;
pub mod graph;
pub mod orphan;
pub mod resolver;
pub mod search;
pub mod service;

pub use builder::{Focus, build_graph};
pub use error::{LineageError, LineageResult};
pub use graph::{NodeKind, TimelineEdge, TimelineGraph, TimelineNode, UNRESOLVED_CLIENT_LABEL};
pub use resolver::{EntityType, Resolution, resolve};
pub use search::{DEFAULT_SEARCH_LIMIT, SearchResults, SearchRow, search};
pub use service::TimelineService;

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::{DateTime, Duration, Utc};

    use pressroom_core::{ExpenseOrderId, OrderId, QuoteId, WorkOrderId};
    use pressroom_documents::{ExpenseOrderStatus, OrderStatus, QuoteStatus, WorkOrderStatus};
    use pressroom_infra::{
        ExpenseOrderRecord, InMemoryDocumentStore, OrderRecord, QuoteRecord, WorkOrderRecord,
    };

    pub fn quote(number: &str, client: &str, order_id: Option<OrderId>) -> QuoteRecord {
        QuoteRecord {
            id: QuoteId::new(),
            number: number.into(),
            status: if order_id.is_some() {
                QuoteStatus::Converted
            } else {
                QuoteStatus::Sent
            },
            total_cents: 180_000,
            created_at: Utc::now() - Duration::days(7),
            created_by: "Laura V.".into(),
            client_name: client.into(),
            channel_name: Some("trade fair".into()),
            order_id,
        }
    }

    pub fn order(number: &str, client: &str) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(),
            number: number.into(),
            status: OrderStatus::InProduction,
            total_cents: 180_000,
            balance_cents: 60_000,
            created_at: Utc::now() - Duration::days(5),
            created_by: "Laura V.".into(),
            client_name: client.into(),
        }
    }

    pub fn work_order(
        number: &str,
        order_id: OrderId,
        created_at: DateTime<Utc>,
    ) -> WorkOrderRecord {
        WorkOrderRecord {
            id: WorkOrderId::new(),
            number: number.into(),
            status: WorkOrderStatus::InProgress,
            created_at,
            updated_at: created_at + Duration::hours(1),
            order_id,
            advisor_name: "Pedro M.".into(),
            designer_name: Some("Sofia R.".into()),
        }
    }

    pub fn expense_order(
        number: &str,
        work_order_id: Option<WorkOrderId>,
        line_totals_cents: Vec<i64>,
    ) -> ExpenseOrderRecord {
        ExpenseOrderRecord {
            id: ExpenseOrderId::new(),
            number: number.into(),
            status: ExpenseOrderStatus::Approved,
            created_at: Utc::now() - Duration::days(1),
            work_order_id,
            line_totals_cents,
        }
    }

    /// Quote -> order -> two work orders; the first work order carries one
    /// expense order. Returns the seeded store plus the records.
    pub fn seeded_lineage() -> (
        InMemoryDocumentStore,
        QuoteRecord,
        OrderRecord,
        Vec<WorkOrderRecord>,
        ExpenseOrderRecord,
    ) {
        let store = InMemoryDocumentStore::new();
        let o = order("OP-0117", "Imprenta Andina");
        let q = quote("COT-0117", "Imprenta Andina", Some(o.id));
        let wo1 = work_order("OT-0117-1", o.id, Utc::now() - Duration::days(4));
        let wo2 = work_order("OT-0117-2", o.id, Utc::now() - Duration::days(3));
        let eo = expense_order("OG-0117-1", Some(wo1.id), vec![4_000, 1_500]);

        store.insert_order(o.clone());
        store.insert_quote(q.clone());
        store.insert_work_order(wo1.clone());
        store.insert_work_order(wo2.clone());
        store.insert_expense_order(eo.clone());

        (store, q, o, vec![wo1, wo2], eo)
    }
}
