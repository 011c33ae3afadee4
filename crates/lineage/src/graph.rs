//! The rendered timeline: typed nodes, parent→child edges, root + focus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client label used when no Order → Client chain is resolvable (orphan
/// expense orders). Rows are kept, never omitted.
pub const UNRESOLVED_CLIENT_LABEL: &str = "—";

/// Node type tag, fixed per document kind. The wire values are the
/// business's own document prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "COT")]
    Quote,
    #[serde(rename = "OP")]
    Order,
    #[serde(rename = "OT")]
    WorkOrder,
    #[serde(rename = "OG")]
    ExpenseOrder,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Quote => "COT",
            NodeKind::Order => "OP",
            NodeKind::WorkOrder => "OT",
            NodeKind::ExpenseOrder => "OG",
        }
    }
}

/// One document in the rendered tree.
///
/// The optional fields are type-specific: creator for quotes/orders, channel
/// for quotes, pending balance for orders, advisor/designer and `ended_at`
/// for work orders. Work order nodes never carry a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineNode {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub number: String,
    pub status: String,
    pub client_name: String,
    /// Money in cents; None both when the type carries no total and when an
    /// expense order's lines sum to exactly zero.
    #[serde(rename = "total")]
    pub total_cents: Option<i64>,
    pub detail_path: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub channel_name: Option<String>,
    #[serde(rename = "balance")]
    pub balance_cents: Option<i64>,
    pub advisor_name: Option<String>,
    pub designer_name: Option<String>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// Directed parent→child edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEdge {
    pub source: Uuid,
    pub target: Uuid,
}

/// The full response graph. Always a tree: one root (the quote when it
/// exists, else the order), every other node reachable through exactly one
/// parent edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGraph {
    pub nodes: Vec<TimelineNode>,
    pub edges: Vec<TimelineEdge>,
    pub root_id: Uuid,
    pub focused_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_serializes_as_document_prefix() {
        assert_eq!(
            serde_json::to_string(&NodeKind::Quote).unwrap(),
            "\"COT\""
        );
        assert_eq!(
            serde_json::to_string(&NodeKind::ExpenseOrder).unwrap(),
            "\"OG\""
        );
        assert_eq!(NodeKind::WorkOrder.as_str(), "OT");
    }
}
