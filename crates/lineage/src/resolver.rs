//! Lineage resolver: map any (entity type, id) pair to the owning order.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressroom_core::{ExpenseOrderId, OrderId, QuoteId, WorkOrderId};
use pressroom_infra::DocumentStore;

use crate::error::{LineageError, LineageResult};

/// Which document type an inbound timeline request names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityType {
    Quote,
    Order,
    WorkOrder,
    ExpenseOrder,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Quote => "quote",
            EntityType::Order => "order",
            EntityType::WorkOrder => "work-order",
            EntityType::ExpenseOrder => "expense-order",
        }
    }
}

impl core::fmt::Display for EntityType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error carries the unrecognized value so the API can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityType(pub String);

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quote" => Ok(EntityType::Quote),
            "order" => Ok(EntityType::Order),
            "work-order" => Ok(EntityType::WorkOrder),
            "expense-order" => Ok(EntityType::ExpenseOrder),
            other => Err(UnknownEntityType(other.to_string())),
        }
    }
}

/// Outcome of lineage resolution.
///
/// Exactly one of these is produced per request (or `NotFound`). The two
/// orphan variants are recoverable control flow, not errors: the orchestrator
/// turns them into one-node timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved { order_id: OrderId },
    QuoteWithoutOrder { quote_id: QuoteId },
    ExpenseOrderWithoutWorkOrder { expense_order_id: ExpenseOrderId },
}

/// Resolve the order anchoring `entity_id`'s lineage. Read-only.
pub async fn resolve(
    store: &dyn DocumentStore,
    entity_type: EntityType,
    entity_id: Uuid,
) -> LineageResult<Resolution> {
    match entity_type {
        // Identity: the order anchors its own lineage. Existence is checked
        // by the graph builder's composite load.
        EntityType::Order => Ok(Resolution::Resolved {
            order_id: OrderId::from_uuid(entity_id),
        }),

        EntityType::Quote => {
            let quote = store
                .quote(QuoteId::from_uuid(entity_id))
                .await?
                .ok_or(LineageError::NotFound)?;
            match quote.order_id {
                Some(order_id) => Ok(Resolution::Resolved { order_id }),
                None => Ok(Resolution::QuoteWithoutOrder { quote_id: quote.id }),
            }
        }

        EntityType::WorkOrder => {
            let wo = store
                .work_order(WorkOrderId::from_uuid(entity_id))
                .await?
                .ok_or(LineageError::NotFound)?;
            Ok(Resolution::Resolved {
                order_id: wo.order_id,
            })
        }

        EntityType::ExpenseOrder => {
            let anchor = store
                .expense_order_anchor(ExpenseOrderId::from_uuid(entity_id))
                .await?
                .ok_or(LineageError::NotFound)?;
            match anchor.order_id {
                Some(order_id) => Ok(Resolution::Resolved { order_id }),
                None => Ok(Resolution::ExpenseOrderWithoutWorkOrder {
                    expense_order_id: anchor.record.id,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;
    use pressroom_infra::InMemoryDocumentStore;

    #[test]
    fn entity_type_parses_the_four_route_segments() {
        assert_eq!("quote".parse::<EntityType>().unwrap(), EntityType::Quote);
        assert_eq!("order".parse::<EntityType>().unwrap(), EntityType::Order);
        assert_eq!(
            "work-order".parse::<EntityType>().unwrap(),
            EntityType::WorkOrder
        );
        assert_eq!(
            "expense-order".parse::<EntityType>().unwrap(),
            EntityType::ExpenseOrder
        );
        let err = "bogus-type".parse::<EntityType>().unwrap_err();
        assert_eq!(err.0, "bogus-type");
    }

    #[tokio::test]
    async fn order_resolves_to_itself_without_a_lookup() {
        let store = InMemoryDocumentStore::new();
        let id = Uuid::now_v7();
        let res = resolve(&store, EntityType::Order, id).await.unwrap();
        assert_eq!(
            res,
            Resolution::Resolved {
                order_id: pressroom_core::OrderId::from_uuid(id)
            }
        );
    }

    #[tokio::test]
    async fn quote_resolves_to_its_order_or_signals_the_orphan() {
        let (store, q, o, _, _) = testutil::seeded_lineage();
        let res = resolve(&store, EntityType::Quote, *q.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(res, Resolution::Resolved { order_id: o.id });

        let unconverted = testutil::quote("COT-0200", "Taller Norte", None);
        store.insert_quote(unconverted.clone());
        let res = resolve(&store, EntityType::Quote, *unconverted.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(
            res,
            Resolution::QuoteWithoutOrder {
                quote_id: unconverted.id
            }
        );
    }

    #[tokio::test]
    async fn missing_documents_are_not_found_per_type() {
        let store = InMemoryDocumentStore::new();
        for et in [
            EntityType::Quote,
            EntityType::WorkOrder,
            EntityType::ExpenseOrder,
        ] {
            let err = resolve(&store, et, Uuid::now_v7()).await.unwrap_err();
            assert!(matches!(err, LineageError::NotFound), "{et}");
        }
    }

    #[tokio::test]
    async fn work_order_resolves_to_its_owning_order() {
        let (store, _, o, wos, _) = testutil::seeded_lineage();
        let res = resolve(&store, EntityType::WorkOrder, *wos[1].id.as_uuid())
            .await
            .unwrap();
        assert_eq!(res, Resolution::Resolved { order_id: o.id });
    }

    #[tokio::test]
    async fn expense_order_resolves_through_its_work_order_or_signals_the_orphan() {
        let (store, _, o, _, eo) = testutil::seeded_lineage();
        let res = resolve(&store, EntityType::ExpenseOrder, *eo.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(res, Resolution::Resolved { order_id: o.id });

        let detached = testutil::expense_order("OG-0300", None, vec![1_000]);
        store.insert_expense_order(detached.clone());
        let res = resolve(&store, EntityType::ExpenseOrder, *detached.id.as_uuid())
            .await
            .unwrap();
        assert_eq!(
            res,
            Resolution::ExpenseOrderWithoutWorkOrder {
                expense_order_id: detached.id
            }
        );
    }
}
