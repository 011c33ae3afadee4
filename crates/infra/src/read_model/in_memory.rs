//! In-memory document store for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use pressroom_core::{ExpenseOrderId, OrderId, QuoteId, WorkOrderId};

use crate::read_model::records::{
    ExpenseOrderAnchor, ExpenseOrderRecord, OrderRecord, OrderTree, QuoteRecord, SearchHit,
    WorkOrderRecord, WorkOrderTree,
};
use crate::read_model::store::{DocumentStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    quotes: HashMap<QuoteId, QuoteRecord>,
    orders: HashMap<OrderId, OrderRecord>,
    work_orders: HashMap<WorkOrderId, WorkOrderRecord>,
    expense_orders: HashMap<ExpenseOrderId, ExpenseOrderRecord>,
}

/// In-memory [`DocumentStore`] backed by hash maps under one lock.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Tables>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_quote(&self, record: QuoteRecord) {
        if let Ok(mut t) = self.inner.write() {
            t.quotes.insert(record.id, record);
        }
    }

    pub fn insert_order(&self, record: OrderRecord) {
        if let Ok(mut t) = self.inner.write() {
            t.orders.insert(record.id, record);
        }
    }

    pub fn insert_work_order(&self, record: WorkOrderRecord) {
        if let Ok(mut t) = self.inner.write() {
            t.work_orders.insert(record.id, record);
        }
    }

    pub fn insert_expense_order(&self, record: ExpenseOrderRecord) {
        if let Ok(mut t) = self.inner.write() {
            t.expense_orders.insert(record.id, record);
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::backend("document store lock poisoned"))
    }
}

fn matches(term: &str, number: &str, client: Option<&str>) -> bool {
    let term = term.to_lowercase();
    number.to_lowercase().contains(&term)
        || client.is_some_and(|c| c.to_lowercase().contains(&term))
}

fn cap_newest_first(mut hits: Vec<SearchHit>, limit: usize) -> Vec<SearchHit> {
    hits.sort_by_key(|h| std::cmp::Reverse(h.created_at));
    hits.truncate(limit);
    hits
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn quote(&self, id: QuoteId) -> Result<Option<QuoteRecord>, StoreError> {
        Ok(self.read()?.quotes.get(&id).cloned())
    }

    async fn work_order(&self, id: WorkOrderId) -> Result<Option<WorkOrderRecord>, StoreError> {
        Ok(self.read()?.work_orders.get(&id).cloned())
    }

    async fn expense_order_anchor(
        &self,
        id: ExpenseOrderId,
    ) -> Result<Option<ExpenseOrderAnchor>, StoreError> {
        let t = self.read()?;
        let Some(record) = t.expense_orders.get(&id).cloned() else {
            return Ok(None);
        };
        let order_id = record
            .work_order_id
            .and_then(|wo_id| t.work_orders.get(&wo_id))
            .map(|wo| wo.order_id);
        Ok(Some(ExpenseOrderAnchor { record, order_id }))
    }

    async fn order_tree(&self, id: OrderId) -> Result<Option<OrderTree>, StoreError> {
        let t = self.read()?;
        let Some(order) = t.orders.get(&id).cloned() else {
            return Ok(None);
        };

        let quote = t
            .quotes
            .values()
            .find(|q| q.order_id == Some(id))
            .cloned();

        let mut work_orders: Vec<WorkOrderTree> = t
            .work_orders
            .values()
            .filter(|wo| wo.order_id == id)
            .map(|wo| {
                let mut expense_orders: Vec<ExpenseOrderRecord> = t
                    .expense_orders
                    .values()
                    .filter(|eo| eo.work_order_id == Some(wo.id))
                    .cloned()
                    .collect();
                expense_orders.sort_by_key(|eo| eo.created_at);
                WorkOrderTree {
                    work_order: wo.clone(),
                    expense_orders,
                }
            })
            .collect();
        work_orders.sort_by_key(|wt| wt.work_order.created_at);

        Ok(Some(OrderTree {
            order,
            quote,
            work_orders,
        }))
    }

    async fn search_quotes(&self, term: &str, limit: usize) -> Result<Vec<SearchHit>, StoreError> {
        let t = self.read()?;
        let hits = t
            .quotes
            .values()
            .filter(|q| matches(term, &q.number, Some(&q.client_name)))
            .map(|q| SearchHit {
                id: *q.id.as_uuid(),
                number: q.number.clone(),
                status: q.status.to_string(),
                client_name: Some(q.client_name.clone()),
                created_at: q.created_at,
            })
            .collect();
        Ok(cap_newest_first(hits, limit))
    }

    async fn search_orders(&self, term: &str, limit: usize) -> Result<Vec<SearchHit>, StoreError> {
        let t = self.read()?;
        let hits = t
            .orders
            .values()
            .filter(|o| matches(term, &o.number, Some(&o.client_name)))
            .map(|o| SearchHit {
                id: *o.id.as_uuid(),
                number: o.number.clone(),
                status: o.status.to_string(),
                client_name: Some(o.client_name.clone()),
                created_at: o.created_at,
            })
            .collect();
        Ok(cap_newest_first(hits, limit))
    }

    async fn search_work_orders(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, StoreError> {
        let t = self.read()?;
        let hits = t
            .work_orders
            .values()
            .filter_map(|wo| {
                let client = t.orders.get(&wo.order_id).map(|o| o.client_name.clone());
                if matches(term, &wo.number, client.as_deref()) {
                    Some(SearchHit {
                        id: *wo.id.as_uuid(),
                        number: wo.number.clone(),
                        status: wo.status.to_string(),
                        client_name: client,
                        created_at: wo.created_at,
                    })
                } else {
                    None
                }
            })
            .collect();
        Ok(cap_newest_first(hits, limit))
    }

    async fn search_expense_orders(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, StoreError> {
        let t = self.read()?;
        let hits = t
            .expense_orders
            .values()
            .filter_map(|eo| {
                // Client resolves through work order -> order; orphans stay in
                // the result set with no client.
                let client = eo
                    .work_order_id
                    .and_then(|wo_id| t.work_orders.get(&wo_id))
                    .and_then(|wo| t.orders.get(&wo.order_id))
                    .map(|o| o.client_name.clone());
                if matches(term, &eo.number, client.as_deref()) {
                    Some(SearchHit {
                        id: *eo.id.as_uuid(),
                        number: eo.number.clone(),
                        status: eo.status.to_string(),
                        client_name: client,
                        created_at: eo.created_at,
                    })
                } else {
                    None
                }
            })
            .collect();
        Ok(cap_newest_first(hits, limit))
    }
}
