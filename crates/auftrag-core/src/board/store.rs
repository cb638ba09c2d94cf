//! The record store: the single ordered collection of work orders.
//!
//! Column order is not stored separately. The relative order of work orders
//! sharing a status in the flat collection is their order within that
//! column; orders of different status may interleave freely.

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::model::{ColumnSet, ReorderPolicy, WorkOrder, WorkOrderFields, WorkOrderPatch};
use super::projection::{self, BoardView};
use crate::error::{AuftragError, AuftragResult};

/// Owns the work orders of one board. Every mutation goes through here.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    columns: ColumnSet,
    policy: ReorderPolicy,
    orders: Vec<WorkOrder>,
}

impl RecordStore {
    /// Create an empty board with the given columns.
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            columns,
            policy: ReorderPolicy::default(),
            orders: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: ReorderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rebuild a board from previously stored work orders, checking that ids
    /// are unique and every status is a configured column.
    pub fn from_parts(
        columns: ColumnSet,
        policy: ReorderPolicy,
        orders: Vec<WorkOrder>,
    ) -> AuftragResult<Self> {
        for (i, order) in orders.iter().enumerate() {
            columns.require(&order.status)?;
            if orders[..i].iter().any(|o| o.id == order.id) {
                return Err(AuftragError::DuplicateId(order.id.clone()));
            }
        }

        Ok(Self {
            columns,
            policy,
            orders,
        })
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn policy(&self) -> ReorderPolicy {
        self.policy
    }

    /// All work orders in flat order.
    pub fn all(&self) -> &[WorkOrder] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&WorkOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of work orders currently in `status`.
    pub fn column_count(&self, status: &str) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// Per-column view of the current state.
    pub fn project(&self) -> BoardView<'_> {
        projection::project(&self.orders, &self.columns)
    }

    /// Append a new work order to the first column.
    pub fn create(&mut self, fields: WorkOrderFields) -> &WorkOrder {
        let now = Utc::now();
        let order = WorkOrder {
            id: Uuid::new_v4().to_string(),
            fields,
            status: self.columns.first().to_string(),
            created_at: now,
            updated_at: now,
        };
        debug!(id = %order.id, status = %order.status, "created work order");

        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }

    /// Overwrite the fields set in `patch`. Id, status and position are kept.
    pub fn update(&mut self, id: &str, patch: WorkOrderPatch) -> AuftragResult<&WorkOrder> {
        let index = self.index_of(id)?;
        let order = &mut self.orders[index];
        patch.apply_to(&mut order.fields);
        order.updated_at = Utc::now();
        debug!(id, "updated work order");

        Ok(&self.orders[index])
    }

    /// Remove a work order. The others keep their relative order.
    pub fn delete(&mut self, id: &str) -> AuftragResult<WorkOrder> {
        let index = self.index_of(id)?;
        let removed = self.orders.remove(index);
        debug!(id, status = %removed.status, "deleted work order");

        Ok(removed)
    }

    /// Move a work order into `target_status`.
    ///
    /// With [`ReorderPolicy::Append`] the order lands directly after the
    /// last remaining member of the destination column (or at the front of
    /// the flat collection when the column is empty) and `target_index` is
    /// ignored. With [`ReorderPolicy::Positional`] it lands at
    /// `target_index` within the column, clamped to the column length.
    ///
    /// An unknown column is rejected and an unknown id is reported; in both
    /// cases nothing changes. No other work order changes status.
    pub fn move_order(
        &mut self,
        id: &str,
        target_status: &str,
        target_index: usize,
    ) -> AuftragResult<&WorkOrder> {
        self.columns.require(target_status)?;
        let from = self.index_of(id)?;

        let mut order = self.orders.remove(from);
        let source = std::mem::replace(&mut order.status, target_status.to_string());
        order.updated_at = Utc::now();

        let members: Vec<usize> = self
            .orders
            .iter()
            .enumerate()
            .filter(|(_, o)| o.status == target_status)
            .map(|(i, _)| i)
            .collect();

        let at = match self.policy {
            ReorderPolicy::Positional if target_index < members.len() => members[target_index],
            _ => members.last().map_or(members.len(), |&last| last + 1),
        };

        debug!(
            id,
            from = %source,
            to = target_status,
            requested = target_index,
            flat_index = at,
            "moved work order"
        );
        self.orders.insert(at, order);
        Ok(&self.orders[at])
    }

    fn index_of(&self, id: &str) -> AuftragResult<usize> {
        self.orders.iter().position(|o| o.id == id).ok_or_else(|| {
            warn!(id, "work order not found, leaving board unchanged");
            AuftragError::WorkOrderNotFound(id.to_string())
        })
    }
}
