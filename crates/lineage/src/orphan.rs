//! Orphan fallbacks: one-node, zero-edge timelines for documents whose
//! expected parent link is absent.

use pressroom_core::{ExpenseOrderId, QuoteId};
use pressroom_infra::DocumentStore;

use crate::builder::{expense_order_node, quote_node};
use crate::error::{LineageError, LineageResult};
use crate::graph::{TimelineGraph, TimelineNode};

fn single_node_graph(node: TimelineNode) -> TimelineGraph {
    let id = node.id;
    TimelineGraph {
        nodes: vec![node],
        edges: Vec::new(),
        root_id: id,
        focused_id: id,
    }
}

/// A quote that never converted into an order: render it alone, with the same
/// node shape (creator, channel) the full builder would have produced.
pub async fn quote_without_order_graph(
    store: &dyn DocumentStore,
    quote_id: QuoteId,
) -> LineageResult<TimelineGraph> {
    let quote = store.quote(quote_id).await?.ok_or(LineageError::NotFound)?;
    Ok(single_node_graph(quote_node(&quote)))
}

/// An expense order detached from its work order: no Order → Client chain is
/// resolvable, so the node carries the placeholder client label.
pub async fn expense_order_without_work_order_graph(
    store: &dyn DocumentStore,
    expense_order_id: ExpenseOrderId,
) -> LineageResult<TimelineGraph> {
    let anchor = store
        .expense_order_anchor(expense_order_id)
        .await?
        .ok_or(LineageError::NotFound)?;
    Ok(single_node_graph(expense_order_node(&anchor.record, None)))
}
