//! Lineage graph builder: one composite read, then a straight walk down the
//! tree emitting nodes and parent→child edges.

use uuid::Uuid;

use pressroom_infra::{
    DocumentStore, ExpenseOrderRecord, OrderRecord, QuoteRecord, WorkOrderRecord,
};

use crate::error::{LineageError, LineageResult};
use crate::graph::{
    NodeKind, TimelineEdge, TimelineGraph, TimelineNode, UNRESOLVED_CLIENT_LABEL,
};

/// Which node the rendered tree should focus, derived from the entity the
/// original request named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Focus the quote node; falls back to the order node if the tree turns
    /// out to have no quote (defensive — the resolver saw one).
    Quote,
    /// Focus the order node.
    Order,
    /// Focus exactly this node (work order / expense order requests).
    Node(Uuid),
}

/// Build the complete timeline reachable from `order_id`.
///
/// Trusts its caller: `order_id` must come from the resolver. A missing order
/// is still `NotFound` rather than a panic, since ids are stable and the gap
/// would mean the store changed under us.
pub async fn build_graph(
    store: &dyn DocumentStore,
    order_id: pressroom_core::OrderId,
    focus: Focus,
) -> LineageResult<TimelineGraph> {
    let tree = store
        .order_tree(order_id)
        .await?
        .ok_or(LineageError::NotFound)?;

    let order_uuid = *tree.order.id.as_uuid();
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    if let Some(quote) = &tree.quote {
        nodes.push(quote_node(quote));
        edges.push(TimelineEdge {
            source: *quote.id.as_uuid(),
            target: order_uuid,
        });
    }
    nodes.push(order_node(&tree.order));

    for wt in &tree.work_orders {
        let wo_uuid = *wt.work_order.id.as_uuid();
        nodes.push(work_order_node(&wt.work_order, &tree.order.client_name));
        edges.push(TimelineEdge {
            source: order_uuid,
            target: wo_uuid,
        });

        for eo in &wt.expense_orders {
            nodes.push(expense_order_node(eo, Some(tree.order.client_name.clone())));
            edges.push(TimelineEdge {
                source: wo_uuid,
                target: *eo.id.as_uuid(),
            });
        }
    }

    let quote_uuid = tree.quote.as_ref().map(|q| *q.id.as_uuid());
    let root_id = quote_uuid.unwrap_or(order_uuid);
    let focused_id = match focus {
        Focus::Quote => quote_uuid.unwrap_or(order_uuid),
        Focus::Order => order_uuid,
        Focus::Node(id) => id,
    };

    tracing::debug!(
        order_id = %tree.order.id,
        nodes = nodes.len(),
        edges = edges.len(),
        "built lineage timeline"
    );

    Ok(TimelineGraph {
        nodes,
        edges,
        root_id,
        focused_id,
    })
}

pub(crate) fn quote_node(quote: &QuoteRecord) -> TimelineNode {
    TimelineNode {
        id: *quote.id.as_uuid(),
        kind: NodeKind::Quote,
        number: quote.number.clone(),
        status: quote.status.to_string(),
        client_name: quote.client_name.clone(),
        total_cents: Some(quote.total_cents),
        detail_path: format!("/quotes/{}", quote.id),
        created_at: quote.created_at,
        created_by: Some(quote.created_by.clone()),
        channel_name: quote.channel_name.clone(),
        balance_cents: None,
        advisor_name: None,
        designer_name: None,
        ended_at: None,
    }
}

pub(crate) fn order_node(order: &OrderRecord) -> TimelineNode {
    TimelineNode {
        id: *order.id.as_uuid(),
        kind: NodeKind::Order,
        number: order.number.clone(),
        status: order.status.to_string(),
        client_name: order.client_name.clone(),
        total_cents: Some(order.total_cents),
        detail_path: format!("/orders/{}", order.id),
        created_at: order.created_at,
        created_by: Some(order.created_by.clone()),
        channel_name: None,
        balance_cents: Some(order.balance_cents),
        advisor_name: None,
        designer_name: None,
        ended_at: None,
    }
}

pub(crate) fn work_order_node(wo: &WorkOrderRecord, client_name: &str) -> TimelineNode {
    // `updated_at` stands in for "time the status became terminal"; it is
    // only exact if nothing else touched the record after the transition.
    let ended_at = wo.status.is_terminal().then_some(wo.updated_at);

    TimelineNode {
        id: *wo.id.as_uuid(),
        kind: NodeKind::WorkOrder,
        number: wo.number.clone(),
        status: wo.status.to_string(),
        client_name: client_name.to_string(),
        total_cents: None,
        detail_path: format!("/work-orders/{}", wo.id),
        created_at: wo.created_at,
        created_by: None,
        channel_name: None,
        balance_cents: None,
        advisor_name: Some(wo.advisor_name.clone()),
        designer_name: wo.designer_name.clone(),
        ended_at,
    }
}

pub(crate) fn expense_order_node(
    eo: &ExpenseOrderRecord,
    client_name: Option<String>,
) -> TimelineNode {
    TimelineNode {
        id: *eo.id.as_uuid(),
        kind: NodeKind::ExpenseOrder,
        number: eo.number.clone(),
        status: eo.status.to_string(),
        client_name: client_name.unwrap_or_else(|| UNRESOLVED_CLIENT_LABEL.to_string()),
        total_cents: display_total(eo.line_total_cents()),
        detail_path: format!("/expense-orders/{}", eo.id),
        created_at: eo.created_at,
        created_by: None,
        channel_name: None,
        balance_cents: None,
        advisor_name: None,
        designer_name: None,
        ended_at: None,
    }
}

/// An exactly-zero sum renders as "no total", conflating "priced at zero"
/// with "not yet priced". Inherited behavior, kept until product says
/// otherwise.
fn display_total(cents: i64) -> Option<i64> {
    (cents != 0).then_some(cents)
}
