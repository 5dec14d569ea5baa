//! Relationship cleanup flows over the public crate surface.

use super::helpers::seeded_board;
use carelane::task::domain::TaskId;

fn tid(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

#[tokio::test(flavor = "multi_thread")]
async fn linked_task_removal_clears_both_directions() {
    let (service, _tasks, hierarchy) = seeded_board().await;
    let linked = hierarchy
        .link_tasks(&tid("T1"), &tid("T4"))
        .expect("distinct tasks");

    let (_removed, scrubbed) = service
        .remove_task(&tid("T4"), &linked)
        .await
        .expect("removal succeeds");

    assert!(scrubbed.links_of(&tid("T1")).is_empty());
    assert!(
        scrubbed
            .link_entries()
            .all(|(from, targets)| from != &tid("T4") && !targets.contains(&tid("T4")))
    );
    scrubbed.check_invariants().expect("scrub keeps consistency");
}

#[tokio::test(flavor = "multi_thread")]
async fn reparenting_through_the_store_never_leaves_stale_listings() {
    let (_service, _tasks, hierarchy) = seeded_board().await;

    let moved = hierarchy
        .add_child(&tid("T3"), &tid("T5"))
        .expect("no cycle");
    assert_eq!(moved.parent_of(&tid("T3")), Some(&tid("T5")));
    assert!(moved.children_of(&tid("T2")).is_empty());
    moved.check_invariants().expect("reparent keeps consistency");
}

#[tokio::test(flavor = "multi_thread")]
async fn dangling_references_survive_until_the_views_drop_them() {
    let (service, tasks, hierarchy) = seeded_board().await;

    // Remove T3 from the directory but keep the stale hierarchy snapshot.
    let (_removed, _scrubbed) = service
        .remove_task(&tid("T3"), &hierarchy)
        .await
        .expect("removal succeeds");
    let remaining = service.list_tasks().await.expect("listing succeeds");
    assert_eq!(remaining.len(), tasks.len() - 1);

    // The stale snapshot still names T3; the accessor drops it silently.
    let related = carelane::hierarchy::services::related_tasks(&tid("T2"), &remaining, &hierarchy);
    assert!(related.child_tasks.is_empty());
}
