//! Request-facing orchestration of resolver, builder and orphan fallbacks.

use std::sync::Arc;

use uuid::Uuid;

use pressroom_infra::DocumentStore;

use crate::builder::{Focus, build_graph};
use crate::error::LineageResult;
use crate::graph::TimelineGraph;
use crate::orphan;
use crate::resolver::{EntityType, Resolution, resolve};
use crate::search::{SearchResults, search};

/// Stateless per-request service over an injected document store.
#[derive(Clone)]
pub struct TimelineService {
    store: Arc<dyn DocumentStore>,
}

impl TimelineService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Resolve `entity_id`'s lineage and render the timeline.
    ///
    /// The two orphan resolutions come back as valid one-node graphs, so the
    /// HTTP layer cannot tell them apart from the full-tree case.
    pub async fn timeline(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> LineageResult<TimelineGraph> {
        let store = self.store.as_ref();
        match resolve(store, entity_type, entity_id).await? {
            Resolution::Resolved { order_id } => {
                build_graph(store, order_id, focus_for(entity_type, entity_id)).await
            }
            Resolution::QuoteWithoutOrder { quote_id } => {
                tracing::debug!(%quote_id, "quote has no order yet; one-node timeline");
                orphan::quote_without_order_graph(store, quote_id).await
            }
            Resolution::ExpenseOrderWithoutWorkOrder { expense_order_id } => {
                tracing::debug!(
                    %expense_order_id,
                    "expense order detached from its work order; one-node timeline"
                );
                orphan::expense_order_without_work_order_graph(store, expense_order_id).await
            }
        }
    }

    pub async fn search(&self, term: &str, per_type_limit: usize) -> LineageResult<SearchResults> {
        search(self.store.as_ref(), term, per_type_limit).await
    }
}

fn focus_for(entity_type: EntityType, entity_id: Uuid) -> Focus {
    match entity_type {
        EntityType::Quote => Focus::Quote,
        EntityType::Order => Focus::Order,
        // Other nodes get loaded to build the surrounding tree, but focus
        // stays on exactly the entity the caller asked about.
        EntityType::WorkOrder | EntityType::ExpenseOrder => Focus::Node(entity_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineageError;
    use crate::testutil;
    use pressroom_infra::InMemoryDocumentStore;

    fn service(store: InMemoryDocumentStore) -> TimelineService {
        TimelineService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn quote_request_focuses_the_quote_node() {
        let (store, q, _, _, _) = testutil::seeded_lineage();
        let svc = service(store);

        let graph = svc
            .timeline(EntityType::Quote, *q.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.root_id, *q.id.as_uuid());
        assert_eq!(graph.focused_id, *q.id.as_uuid());
    }

    #[tokio::test]
    async fn expense_order_request_builds_the_whole_tree_but_focuses_itself() {
        let (store, q, _, _, eo) = testutil::seeded_lineage();
        let svc = service(store);

        let graph = svc
            .timeline(EntityType::ExpenseOrder, *eo.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.root_id, *q.id.as_uuid());
        assert_eq!(graph.focused_id, *eo.id.as_uuid());
    }

    #[tokio::test]
    async fn quote_orphan_flows_through_as_a_one_node_timeline() {
        let store = InMemoryDocumentStore::new();
        let q = testutil::quote("COT-0700", "Taller Norte", None);
        store.insert_quote(q.clone());
        let svc = service(store);

        let graph = svc
            .timeline(EntityType::Quote, *q.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.root_id, *q.id.as_uuid());
        assert_eq!(graph.focused_id, *q.id.as_uuid());
    }

    #[tokio::test]
    async fn unknown_order_id_is_not_found_at_build_time() {
        let svc = service(InMemoryDocumentStore::new());
        let err = svc
            .timeline(EntityType::Order, Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, LineageError::NotFound));
    }
}
