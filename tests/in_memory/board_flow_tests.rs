//! End-to-end board flows over the public crate surface.

use super::helpers::{ids, seeded_board};
use carelane::assist::{ReplyComposer, ReplyKind};
use carelane::hierarchy::services::{build_task_tree, related_tasks};
use carelane::pipeline::{
    FilterCriteria, GroupKey, SortDirection, SortKey, board_columns, calendar_buckets, list_view,
};
use carelane::task::domain::{Task, TaskId, TaskStatus};

fn tid(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

#[tokio::test(flavor = "multi_thread")]
async fn seeded_hierarchy_resolves_subtasks() -> eyre::Result<()> {
    let (_service, tasks, hierarchy) = seeded_board().await;

    let related = related_tasks(&tid("T2"), &tasks, &hierarchy);
    let child_ids: Vec<_> = related.child_tasks.iter().map(Task::id).collect();
    eyre::ensure!(child_ids == vec![&tid("T3")], "T3 should be T2's subtask");

    let child_view = related_tasks(&tid("T3"), &tasks, &hierarchy);
    eyre::ensure!(
        child_view.parent_task.as_ref().map(Task::id) == Some(&tid("T2")),
        "T3 should resolve its parent"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn removing_a_subtask_empties_the_parent_listing() {
    let (service, _tasks, hierarchy) = seeded_board().await;

    let (_removed, scrubbed) = service
        .remove_task(&tid("T3"), &hierarchy)
        .await
        .expect("removal succeeds");
    let remaining = service.list_tasks().await.expect("listing succeeds");

    let related = related_tasks(&tid("T2"), &remaining, &scrubbed);
    assert!(related.child_tasks.is_empty());
    assert!(
        scrubbed
            .child_entries()
            .all(|(parent, _)| parent != &tid("T2")),
        "emptied children list should be pruned, not retained"
    );
    scrubbed.check_invariants().expect("scrub keeps consistency");
}

#[tokio::test(flavor = "multi_thread")]
async fn done_filter_returns_exactly_the_done_tickets() {
    let (_service, tasks, _hierarchy) = seeded_board().await;

    let criteria = FilterCriteria::new().with_status(TaskStatus::Done);
    let groups = list_view(
        &tasks,
        &criteria,
        SortKey::DueDate,
        SortDirection::Ascending,
        GroupKey::None,
    );
    assert_eq!(groups.len(), 1);
    assert_eq!(ids(&groups[0].tasks), vec!["T8", "T3", "T5"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn board_and_calendar_consume_the_same_pipeline() {
    let (_service, tasks, _hierarchy) = seeded_board().await;
    let criteria = FilterCriteria::new();

    let columns = board_columns(&tasks, &criteria, SortKey::DueDate, SortDirection::Ascending);
    let column_sizes: Vec<_> = columns.iter().map(|column| column.tasks.len()).collect();
    assert_eq!(column_sizes, vec![3, 2, 3]);

    let buckets = calendar_buckets(&tasks, &criteria, SortKey::DueDate, SortDirection::Ascending);
    let total: usize = buckets.iter().map(|bucket| bucket.tasks.len()).sum();
    assert_eq!(total, tasks.len());
    assert_eq!(buckets.last().and_then(|bucket| bucket.date), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_tree_nests_the_seeded_subtask() {
    let (_service, tasks, hierarchy) = seeded_board().await;

    let forest = build_task_tree(&tasks, &hierarchy);
    let roots: Vec<_> = forest.iter().map(|node| node.task.id().as_str()).collect();
    assert_eq!(roots, vec!["T1", "T2", "T4", "T5", "T6", "T7", "T8"]);

    let t2 = forest
        .iter()
        .find(|node| node.task.id() == &tid("T2"))
        .expect("T2 is a root");
    assert_eq!(t2.children.len(), 1);
    assert_eq!(t2.children[0].task.id(), &tid("T3"));
    assert_eq!(t2.children[0].depth, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn assistant_summary_reflects_the_live_hierarchy() {
    let (_service, tasks, hierarchy) = seeded_board().await;

    let t2 = tasks
        .iter()
        .find(|task| task.id() == &tid("T2"))
        .expect("T2 present");
    let related = related_tasks(&tid("T2"), &tasks, &hierarchy);

    let composer = ReplyComposer::new().expect("templates parse");
    let reply = composer
        .compose(ReplyKind::CarePlanSummary, t2, &related)
        .expect("render succeeds");

    assert!(reply.contains("Ben Howard"));
    assert!(reply.contains("Fax signed consent form"));
}
