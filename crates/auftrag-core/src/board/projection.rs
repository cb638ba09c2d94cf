//! Per-column view of a board, derived from the flat collection.

use serde::Serialize;
use tracing::warn;

use super::model::{ColumnSet, WorkOrder};

/// A board partitioned into its configured columns.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView<'a> {
    pub columns: Vec<BoardColumn<'a>>,
    /// Work orders whose status matches no configured column. They are not
    /// shown in any column.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphaned: Vec<&'a WorkOrder>,
}

/// A column on the board with its work orders in display order.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<'a> {
    pub name: &'a str,
    pub orders: Vec<&'a WorkOrder>,
}

impl<'a> BoardView<'a> {
    pub fn column(&self, name: &str) -> Option<&BoardColumn<'a>> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of work orders shown across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.orders.len()).sum()
    }
}

/// Partition `records` by status into `columns`, keeping flat order within
/// each column.
pub fn project<'a>(records: &'a [WorkOrder], columns: &'a ColumnSet) -> BoardView<'a> {
    let mut view = BoardView {
        columns: columns
            .iter()
            .map(|name| BoardColumn {
                name,
                orders: Vec::new(),
            })
            .collect(),
        orphaned: Vec::new(),
    };

    for order in records {
        match columns.position(&order.status) {
            Some(i) => view.columns[i].orders.push(order),
            None => {
                warn!(
                    id = %order.id,
                    status = %order.status,
                    "work order outside configured columns"
                );
                view.orphaned.push(order);
            }
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::model::WorkOrderFields;
    use chrono::Utc;

    fn order(id: &str, status: &str) -> WorkOrder {
        let now = Utc::now();
        WorkOrder {
            id: id.to_string(),
            fields: WorkOrderFields::default(),
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn ids<'a>(column: &BoardColumn<'a>) -> Vec<&'a str> {
        column.orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_columns_follow_configured_order() {
        let columns = ColumnSet::new(["Done", "Open"]).unwrap();
        let view = project(&[], &columns);
        let names: Vec<&str> = view.columns.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Done", "Open"]);
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn test_interleaved_records_keep_relative_order() {
        let columns = ColumnSet::default();
        let records = vec![
            order("1", "Offen"),
            order("2", "Termin"),
            order("3", "Offen"),
            order("4", "Termin"),
            order("5", "Rechnung"),
        ];
        let view = project(&records, &columns);

        assert_eq!(ids(view.column("Offen").unwrap()), vec!["1", "3"]);
        assert_eq!(ids(view.column("Termin").unwrap()), vec!["2", "4"]);
        assert_eq!(ids(view.column("Rechnung").unwrap()), vec!["5"]);
        assert!(view.column("Erledigt").unwrap().orders.is_empty());
        assert_eq!(view.total(), records.len());
    }

    #[test]
    fn test_unknown_status_is_excluded_from_columns() {
        let columns = ColumnSet::default();
        let records = vec![order("1", "Offen"), order("2", "Archiv")];
        let view = project(&records, &columns);

        assert_eq!(view.total(), 1);
        assert_eq!(view.orphaned.len(), 1);
        assert_eq!(view.orphaned[0].id, "2");
    }

    #[test]
    fn test_projection_serializes_per_column() {
        let columns = ColumnSet::new(["Offen"]).unwrap();
        let records = vec![order("1", "Offen")];
        let json = serde_json::to_value(project(&records, &columns)).unwrap();

        assert_eq!(json["columns"][0]["name"], "Offen");
        assert_eq!(json["columns"][0]["orders"][0]["id"], "1");
        assert!(json.get("orphaned").is_none());
    }
}
