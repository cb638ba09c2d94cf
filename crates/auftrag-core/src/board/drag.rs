//! Drag-and-drop results as reported by the board front end.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::WorkOrder;
use super::store::RecordStore;
use crate::error::AuftragResult;

/// A column and a position inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub column: String,
    pub index: usize,
}

/// The outcome of a finished drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub draggable_id: String,
    pub source: DropLocation,
    /// `None` when the card was dropped outside any column.
    pub destination: Option<DropLocation>,
}

impl RecordStore {
    /// Apply a finished drag. A drop outside any column changes nothing and
    /// yields `Ok(None)`.
    pub fn apply_drag_end(&mut self, drag: &DragEnd) -> AuftragResult<Option<&WorkOrder>> {
        let Some(destination) = &drag.destination else {
            debug!(id = %drag.draggable_id, "drop without destination ignored");
            return Ok(None);
        };

        self.move_order(&drag.draggable_id, &destination.column, destination.index)
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::model::{ColumnSet, WorkOrderFields};

    fn drag(id: &str, to: Option<(&str, usize)>) -> DragEnd {
        DragEnd {
            draggable_id: id.to_string(),
            source: DropLocation {
                column: "Offen".into(),
                index: 0,
            },
            destination: to.map(|(column, index)| DropLocation {
                column: column.to_string(),
                index,
            }),
        }
    }

    #[test]
    fn test_drop_outside_columns_is_noop() {
        let mut store = RecordStore::new(ColumnSet::default());
        let id = store.create(WorkOrderFields::default()).id.clone();
        let before = store.all().to_vec();

        assert!(store.apply_drag_end(&drag(&id, None)).unwrap().is_none());
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_drop_into_column_moves() {
        let mut store = RecordStore::new(ColumnSet::default());
        let id = store.create(WorkOrderFields::default()).id.clone();

        let moved = store.apply_drag_end(&drag(&id, Some(("Termin", 0)))).unwrap();
        assert_eq!(moved.unwrap().status, "Termin");
    }

    #[test]
    fn test_drop_of_stale_card_reports_not_found() {
        let mut store = RecordStore::new(ColumnSet::default());
        let err = store.apply_drag_end(&drag("gone", Some(("Termin", 0)))).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }
}
