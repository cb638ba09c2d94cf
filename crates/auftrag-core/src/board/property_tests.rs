//! Property-based tests for the board invariants.
//!
//! Random sequences of create/update/delete/move are applied to a store and
//! the partition, id and move guarantees are checked after every step.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::board::model::{
        ColumnSet, ReorderPolicy, WorkOrderFields, WorkOrderPatch, DEFAULT_COLUMNS,
    };
    use crate::board::store::RecordStore;

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Update(usize, String),
        Delete(usize),
        Move(usize, usize, usize),
        MoveStale(usize),
        DeleteStale,
    }

    // ===== STRATEGY HELPERS =====

    fn any_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => "[a-zA-Z ]{0,12}".prop_map(Op::Create),
            1 => (any::<usize>(), "[a-z]{0,8}").prop_map(|(i, s)| Op::Update(i, s)),
            1 => any::<usize>().prop_map(Op::Delete),
            3 => (any::<usize>(), 0..DEFAULT_COLUMNS.len(), 0usize..6)
                .prop_map(|(i, c, t)| Op::Move(i, c, t)),
            1 => (0..DEFAULT_COLUMNS.len()).prop_map(Op::MoveStale),
            1 => Just(Op::DeleteStale),
        ]
    }

    fn any_policy() -> impl Strategy<Value = ReorderPolicy> {
        prop_oneof![Just(ReorderPolicy::Append), Just(ReorderPolicy::Positional)]
    }

    /// Pick an existing id by wrapping `i` over the store length.
    fn pick(store: &RecordStore, i: usize) -> Option<String> {
        if store.is_empty() {
            None
        } else {
            Some(store.all()[i % store.len()].id.clone())
        }
    }

    fn apply(store: &mut RecordStore, op: &Op) {
        match op {
            Op::Create(customer) => {
                store.create(WorkOrderFields {
                    customer: customer.clone(),
                    ..Default::default()
                });
            }
            Op::Update(i, phone) => {
                if let Some(id) = pick(store, *i) {
                    let patch = WorkOrderPatch {
                        phone: Some(phone.clone()),
                        ..Default::default()
                    };
                    store.update(&id, patch).unwrap();
                }
            }
            Op::Delete(i) => {
                if let Some(id) = pick(store, *i) {
                    store.delete(&id).unwrap();
                }
            }
            Op::Move(i, c, t) => {
                if let Some(id) = pick(store, *i) {
                    store.move_order(&id, DEFAULT_COLUMNS[*c], *t).unwrap();
                }
            }
            Op::MoveStale(c) => {
                let _ = store.move_order("stale-id", DEFAULT_COLUMNS[*c], 0);
            }
            Op::DeleteStale => {
                let _ = store.delete("stale-id");
            }
        }
    }

    fn assert_partition(store: &RecordStore) -> Result<(), TestCaseError> {
        let view = store.project();
        let mut seen = HashSet::new();
        for column in &view.columns {
            for order in &column.orders {
                prop_assert_eq!(order.status.as_str(), column.name);
                prop_assert!(seen.insert(order.id.clone()), "id {} shown twice", order.id);
            }
        }
        let all: HashSet<String> = store.all().iter().map(|o| o.id.clone()).collect();
        prop_assert_eq!(seen, all);
        prop_assert!(view.orphaned.is_empty());
        Ok(())
    }

    proptest! {
        #[test]
        fn partition_and_ids_hold_for_any_history(
            policy in any_policy(),
            ops in prop::collection::vec(any_op(), 0..40),
        ) {
            let mut store = RecordStore::new(ColumnSet::default()).with_policy(policy);
            for op in &ops {
                apply(&mut store, op);

                let ids: HashSet<&str> = store.all().iter().map(|o| o.id.as_str()).collect();
                prop_assert_eq!(ids.len(), store.len());
                assert_partition(&store)?;
            }
        }

        #[test]
        fn create_adds_one_order_in_first_column(
            ops in prop::collection::vec(any_op(), 0..20),
            customer in "[a-z]{0,10}",
        ) {
            let mut store = RecordStore::new(ColumnSet::default());
            for op in &ops {
                apply(&mut store, op);
            }
            let before = store.len();
            let order = store.create(WorkOrderFields { customer, ..Default::default() }).clone();

            prop_assert_eq!(store.len(), before + 1);
            prop_assert_eq!(order.status.as_str(), DEFAULT_COLUMNS[0]);
        }

        #[test]
        fn delete_of_absent_id_changes_nothing(ops in prop::collection::vec(any_op(), 0..20)) {
            let mut store = RecordStore::new(ColumnSet::default());
            for op in &ops {
                apply(&mut store, op);
            }
            let before = store.all().to_vec();

            prop_assert!(store.delete("no-such-id").is_err());
            prop_assert_eq!(store.all(), before.as_slice());
        }

        #[test]
        fn move_puts_order_last_in_its_column_and_keeps_others(
            ops in prop::collection::vec(any_op(), 1..30),
            pick_index in any::<usize>(),
            column in 0..DEFAULT_COLUMNS.len(),
            target in 0usize..6,
        ) {
            let mut store = RecordStore::new(ColumnSet::default());
            store.create(WorkOrderFields::default());
            for op in &ops {
                apply(&mut store, op);
            }
            let Some(id) = pick(&store, pick_index) else {
                return Ok(());
            };
            let target_status = DEFAULT_COLUMNS[column];
            let others: Vec<(String, String)> = store
                .all()
                .iter()
                .filter(|o| o.id != id)
                .map(|o| (o.id.clone(), o.status.clone()))
                .collect();

            store.move_order(&id, target_status, target).unwrap();

            prop_assert_eq!(store.get(&id).unwrap().status.as_str(), target_status);
            let last_in_column = store
                .all()
                .iter()
                .filter(|o| o.status == target_status)
                .last()
                .map(|o| o.id.clone());
            prop_assert_eq!(last_in_column, Some(id.clone()));

            for (other_id, status) in others {
                prop_assert_eq!(&store.get(&other_id).unwrap().status, &status);
            }
        }
    }
}
