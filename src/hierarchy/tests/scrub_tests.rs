//! Unit tests for the multi-id removal scrub.

use super::helpers::tid;
use crate::hierarchy::domain::HierarchyState;
use crate::task::domain::TaskId;
use rstest::{fixture, rstest};

/// A connected fixture: T2 parents T3 and T5, T5 parents T6, links
/// T1↔T4 and T3↔T4.
#[fixture]
fn connected() -> HierarchyState {
    HierarchyState::new()
        .add_child(&tid("T3"), &tid("T2"))
        .expect("no cycle")
        .add_child(&tid("T5"), &tid("T2"))
        .expect("no cycle")
        .add_child(&tid("T6"), &tid("T5"))
        .expect("no cycle")
        .link_tasks(&tid("T1"), &tid("T4"))
        .expect("distinct tasks")
        .link_tasks(&tid("T3"), &tid("T4"))
        .expect("distinct tasks")
}

fn mentions(state: &HierarchyState, id: &TaskId) -> bool {
    state
        .parent_entries()
        .any(|(child, parent)| child == id || parent == id)
        || state
            .child_entries()
            .any(|(parent, kids)| parent == id || kids.contains(id))
        || state
            .link_entries()
            .any(|(from, targets)| from == id || targets.contains(id))
}

#[rstest]
fn remove_task_leaves_no_residual_reference(connected: HierarchyState) {
    for victim in ["T2", "T3", "T4", "T5"] {
        let scrubbed = connected.remove_task(&tid(victim));
        assert!(
            !mentions(&scrubbed, &tid(victim)),
            "{victim} still referenced after removal"
        );
        scrubbed.check_invariants().expect("consistent after scrub");
    }
}

#[rstest]
fn remove_task_prunes_emptied_children_list(connected: HierarchyState) {
    let scrubbed = connected.remove_task(&tid("T6"));
    assert!(scrubbed.children_of(&tid("T5")).is_empty());
    assert!(
        scrubbed
            .child_entries()
            .all(|(parent, _)| parent != &tid("T5"))
    );
}

#[rstest]
fn remove_task_clears_parent_entries_of_orphans(connected: HierarchyState) {
    let scrubbed = connected.remove_task(&tid("T5"));
    assert_eq!(scrubbed.parent_of(&tid("T6")), None);
}

#[rstest]
fn remove_task_keeps_unrelated_links(connected: HierarchyState) {
    let scrubbed = connected.remove_task(&tid("T3"));
    assert_eq!(scrubbed.links_of(&tid("T1")), &[tid("T4")]);
    assert_eq!(scrubbed.links_of(&tid("T4")), &[tid("T1")]);
}

#[rstest]
fn remove_unknown_task_is_noop(connected: HierarchyState) {
    let scrubbed = connected.remove_task(&tid("T99"));
    assert_eq!(connected, scrubbed);
}
