//! Work-order board: the record store, its per-column projection, the drag
//! adapter and the edit form.

pub mod drag;
pub mod form;
pub mod model;
pub mod projection;
pub mod store;

mod property_tests;

pub use drag::{DragEnd, DropLocation};
pub use form::{Field, FormMode};
pub use model::{
    ColumnSet, ReorderPolicy, WorkOrder, WorkOrderFields, WorkOrderPatch, DEFAULT_COLUMNS,
};
pub use projection::{project, BoardColumn, BoardView};
pub use store::RecordStore;
