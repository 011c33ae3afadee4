//! Cross-type search: four independent per-type queries, fanned out
//! concurrently and grouped by document type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressroom_infra::{DocumentStore, SearchHit};

use crate::error::LineageResult;
use crate::graph::{NodeKind, UNRESOLVED_CLIENT_LABEL};
use crate::resolver::EntityType;

/// Per-type result cap when the caller doesn't specify one.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// One search match, tagged so the caller can route a follow-up timeline
/// request (`entity_type`) and render the document prefix (`type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRow {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub number: String,
    pub status: String,
    pub client_name: String,
    pub entity_type: EntityType,
}

/// Matches grouped by document type, each group independently capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub quotes: Vec<SearchRow>,
    pub orders: Vec<SearchRow>,
    pub work_orders: Vec<SearchRow>,
    pub expense_orders: Vec<SearchRow>,
}

/// Run the four type-queries concurrently and join them.
///
/// A failed leg fails the whole search: returning a partially-grouped result
/// without signaling degradation would mislead the caller.
pub async fn search(
    store: &dyn DocumentStore,
    term: &str,
    per_type_limit: usize,
) -> LineageResult<SearchResults> {
    let (quotes, orders, work_orders, expense_orders) = tokio::join!(
        store.search_quotes(term, per_type_limit),
        store.search_orders(term, per_type_limit),
        store.search_work_orders(term, per_type_limit),
        store.search_expense_orders(term, per_type_limit),
    );

    let results = SearchResults {
        quotes: rows(quotes?, NodeKind::Quote, EntityType::Quote),
        orders: rows(orders?, NodeKind::Order, EntityType::Order),
        work_orders: rows(work_orders?, NodeKind::WorkOrder, EntityType::WorkOrder),
        expense_orders: rows(
            expense_orders?,
            NodeKind::ExpenseOrder,
            EntityType::ExpenseOrder,
        ),
    };

    tracing::debug!(
        term,
        quotes = results.quotes.len(),
        orders = results.orders.len(),
        work_orders = results.work_orders.len(),
        expense_orders = results.expense_orders.len(),
        "cross-type search completed"
    );

    Ok(results)
}

fn rows(hits: Vec<SearchHit>, kind: NodeKind, entity_type: EntityType) -> Vec<SearchRow> {
    hits.into_iter()
        .map(|hit| SearchRow {
            id: hit.id,
            kind,
            number: hit.number,
            status: hit.status,
            client_name: hit
                .client_name
                .unwrap_or_else(|| UNRESOLVED_CLIENT_LABEL.to_string()),
            entity_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineageError;
    use crate::testutil;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use pressroom_core::{ExpenseOrderId, OrderId, QuoteId, WorkOrderId};
    use pressroom_infra::{
        ExpenseOrderAnchor, InMemoryDocumentStore, OrderTree, QuoteRecord, StoreError,
        WorkOrderRecord,
    };

    #[tokio::test]
    async fn matches_across_types_land_in_their_own_groups() {
        let store = InMemoryDocumentStore::new();
        // Quote matched by its own number; an unrelated order matched through
        // its client name.
        let q = testutil::quote("COT-ACME-1", "Imprenta Andina", None);
        let o = testutil::order("OP-0042", "Acme Displays");
        store.insert_quote(q.clone());
        store.insert_order(o.clone());

        let results = search(&store, "acme", DEFAULT_SEARCH_LIMIT).await.unwrap();

        assert_eq!(results.quotes.len(), 1);
        assert_eq!(results.quotes[0].id, *q.id.as_uuid());
        assert_eq!(results.quotes[0].kind, NodeKind::Quote);
        assert_eq!(results.quotes[0].entity_type, EntityType::Quote);

        assert_eq!(results.orders.len(), 1);
        assert_eq!(results.orders[0].id, *o.id.as_uuid());
        assert_eq!(results.orders[0].client_name, "Acme Displays");

        assert!(results.work_orders.is_empty());
        assert!(results.expense_orders.is_empty());
    }

    #[tokio::test]
    async fn each_group_is_capped_independently() {
        let store = InMemoryDocumentStore::new();
        for i in 0..4 {
            let mut q = testutil::quote(&format!("COT-10{i}"), "Cliente Uno", None);
            q.created_at = Utc::now() - Duration::minutes(i);
            store.insert_quote(q);

            let mut o = testutil::order(&format!("OP-10{i}"), "Cliente Uno");
            o.id = OrderId::new();
            o.created_at = Utc::now() - Duration::minutes(i);
            store.insert_order(o);
        }

        let results = search(&store, "cliente", 2).await.unwrap();
        assert_eq!(results.quotes.len(), 2);
        assert_eq!(results.orders.len(), 2);
        // Newest first within each group.
        assert_eq!(results.quotes[0].number, "COT-100");
        assert_eq!(results.orders[0].number, "OP-100");
    }

    #[tokio::test]
    async fn work_and_expense_rows_resolve_client_through_the_chain() {
        let (store, _, o, _wos, eo) = testutil::seeded_lineage();

        let results = search(&store, "imprenta", DEFAULT_SEARCH_LIMIT)
            .await
            .unwrap();
        assert_eq!(results.work_orders.len(), 2);
        assert!(
            results
                .work_orders
                .iter()
                .all(|r| r.client_name == o.client_name)
        );
        assert_eq!(results.expense_orders.len(), 1);
        assert_eq!(results.expense_orders[0].id, *eo.id.as_uuid());
        assert_eq!(results.expense_orders[0].entity_type, EntityType::ExpenseOrder);
    }

    /// Store whose quote leg succeeds with a hit while the order leg fails.
    struct BrokenOrdersStore;

    #[async_trait]
    impl pressroom_infra::DocumentStore for BrokenOrdersStore {
        async fn quote(&self, _id: QuoteId) -> Result<Option<QuoteRecord>, StoreError> {
            Ok(None)
        }

        async fn work_order(
            &self,
            _id: WorkOrderId,
        ) -> Result<Option<WorkOrderRecord>, StoreError> {
            Ok(None)
        }

        async fn expense_order_anchor(
            &self,
            _id: ExpenseOrderId,
        ) -> Result<Option<ExpenseOrderAnchor>, StoreError> {
            Ok(None)
        }

        async fn order_tree(
            &self,
            _id: pressroom_core::OrderId,
        ) -> Result<Option<OrderTree>, StoreError> {
            Ok(None)
        }

        async fn search_quotes(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<SearchHit>, StoreError> {
            Ok(vec![SearchHit {
                id: Uuid::now_v7(),
                number: "COT-0001".into(),
                status: "sent".into(),
                client_name: Some("Imprenta Andina".into()),
                created_at: Utc::now(),
            }])
        }

        async fn search_orders(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<SearchHit>, StoreError> {
            Err(StoreError::backend("orders query failed"))
        }

        async fn search_work_orders(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<SearchHit>, StoreError> {
            Ok(Vec::new())
        }

        async fn search_expense_orders(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<SearchHit>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn one_failed_leg_fails_the_whole_search() {
        // Three legs succeed (one even carries a hit); the result is still an
        // error, never a partially-grouped response, and the backend failure
        // comes through unchanged.
        let err = search(&BrokenOrdersStore, "imprenta", DEFAULT_SEARCH_LIMIT)
            .await
            .unwrap_err();
        match err {
            LineageError::Store(StoreError::Backend(msg)) => {
                assert_eq!(msg, "orders query failed");
            }
            other => panic!("expected LineageError::Store, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn orphan_expense_orders_keep_their_row_with_the_placeholder() {
        let store = InMemoryDocumentStore::new();
        let eo = testutil::expense_order("OG-0900", None, vec![1_000]);
        store.insert_expense_order(eo.clone());

        let results = search(&store, "og-0900", DEFAULT_SEARCH_LIMIT)
            .await
            .unwrap();
        assert_eq!(results.expense_orders.len(), 1);
        assert_eq!(
            results.expense_orders[0].client_name,
            UNRESOLVED_CLIENT_LABEL
        );
    }
}
