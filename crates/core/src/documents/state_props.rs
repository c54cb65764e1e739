//! Property tests for document slot independence.

use proptest::prelude::*;

use crate::documents::types::{DocumentApprovalState, DocumentSlot, SlotStatus};

fn slot_strategy() -> impl Strategy<Value = DocumentSlot> {
    prop_oneof![
        Just(DocumentSlot::Photo),
        Just(DocumentSlot::IdFront),
        Just(DocumentSlot::IdBack),
    ]
}

fn status_strategy() -> impl Strategy<Value = SlotStatus> {
    prop_oneof![
        Just(SlotStatus::Unsubmitted),
        Just(SlotStatus::Pending),
        Just(SlotStatus::Approved),
        Just(SlotStatus::Rejected),
    ]
}

fn state_strategy() -> impl Strategy<Value = DocumentApprovalState> {
    (status_strategy(), status_strategy(), status_strategy()).prop_map(
        |(photo, id_front, id_back)| DocumentApprovalState {
            photo,
            id_front,
            id_back,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Setting one slot never changes the other two, for any starting state.
    #[test]
    fn prop_set_slot_is_isolated(
        initial in state_strategy(),
        slot in slot_strategy(),
        status in status_strategy(),
    ) {
        let mut state = initial;
        state.set_slot(slot, status);

        prop_assert_eq!(state.slot(slot), status);
        for other in DocumentSlot::ALL {
            if other != slot {
                prop_assert_eq!(state.slot(other), initial.slot(other));
            }
        }
    }

    /// Two single-slot writes on different slots commute: the merged result
    /// is the same regardless of interleaving order.
    #[test]
    fn prop_distinct_slot_writes_commute(
        initial in state_strategy(),
        first in (slot_strategy(), status_strategy()),
        second in (slot_strategy(), status_strategy()),
    ) {
        prop_assume!(first.0 != second.0);

        let mut ab = initial;
        ab.set_slot(first.0, first.1);
        ab.set_slot(second.0, second.1);

        let mut ba = initial;
        ba.set_slot(second.0, second.1);
        ba.set_slot(first.0, first.1);

        prop_assert_eq!(ab, ba);
    }

    /// Counts always sum to the number of slots.
    #[test]
    fn prop_counts_partition_slots(state in state_strategy()) {
        let total = state.count(SlotStatus::Unsubmitted)
            + state.count(SlotStatus::Pending)
            + state.count(SlotStatus::Approved)
            + state.count(SlotStatus::Rejected);
        prop_assert_eq!(total, DocumentSlot::ALL.len());
    }
}
