//! Unit tests for reducer-style action dispatch.

use super::helpers::tid;
use crate::hierarchy::domain::{HierarchyAction, HierarchyError, HierarchyState};
use rstest::rstest;

#[rstest]
fn actions_mirror_direct_transitions() {
    let direct = HierarchyState::new()
        .add_child(&tid("T3"), &tid("T2"))
        .expect("no cycle")
        .link_tasks(&tid("T1"), &tid("T4"))
        .expect("distinct tasks");

    let dispatched = HierarchyState::new()
        .apply(HierarchyAction::AddChild {
            child: tid("T3"),
            parent: tid("T2"),
        })
        .expect("no cycle")
        .apply(HierarchyAction::LinkTasks {
            a: tid("T1"),
            b: tid("T4"),
        })
        .expect("distinct tasks");

    assert_eq!(direct, dispatched);
}

#[rstest]
fn rejecting_actions_surface_their_errors() {
    let result = HierarchyState::new().apply(HierarchyAction::LinkTasks {
        a: tid("T1"),
        b: tid("T1"),
    });
    assert_eq!(result, Err(HierarchyError::SelfLink(tid("T1"))));
}

#[rstest]
fn initialize_replaces_whole_state() {
    let replacement = HierarchyState::new()
        .add_child(&tid("B"), &tid("A"))
        .expect("no cycle");

    let state = HierarchyState::new()
        .link_tasks(&tid("X"), &tid("Y"))
        .expect("distinct tasks")
        .apply(HierarchyAction::Initialize {
            state: replacement.clone(),
        })
        .expect("total action");

    assert_eq!(state, replacement);
}

#[rstest]
fn total_actions_never_fail_on_unknown_ids() {
    let state = HierarchyState::new()
        .apply(HierarchyAction::RemoveChild {
            child: tid("T1"),
            parent: tid("T2"),
        })
        .expect("total action")
        .apply(HierarchyAction::RemoveParent { child: tid("T1") })
        .expect("total action")
        .apply(HierarchyAction::UnlinkTasks {
            a: tid("T1"),
            b: tid("T2"),
        })
        .expect("total action")
        .apply(HierarchyAction::RemoveTask { id: tid("T1") })
        .expect("total action");

    assert!(state.is_empty());
}
