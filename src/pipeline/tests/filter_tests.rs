//! Unit tests for visibility filtering.

use super::fixtures::{ids, seed_tasks};
use crate::pipeline::{FilterCriteria, filter_tasks};
use crate::task::domain::{CareJourneyId, IssueType, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use rstest::rstest;

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid date")
}

#[rstest]
fn empty_criteria_pass_every_task() {
    let tasks = seed_tasks();
    let visible = filter_tasks(&tasks, &FilterCriteria::new());
    assert_eq!(visible.len(), tasks.len());
}

#[rstest]
fn status_filter_returns_exactly_done_tasks() {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new().with_status(TaskStatus::Done);
    let visible = filter_tasks(&tasks, &criteria);
    assert_eq!(ids(&visible), vec!["T3", "T5", "T8"]);
}

#[rstest]
#[case("amelia", vec!["T1"])]
#[case("BEN", vec!["T2", "T3"])]
#[case("ct-1007", vec!["T7"])]
#[case("follow-up call", vec!["T6"])]
#[case("no such needle", vec![])]
fn search_matches_patient_description_or_ticket(
    #[case] needle: &str,
    #[case] expected: Vec<&str>,
) {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new().with_search(needle);
    assert_eq!(ids(&filter_tasks(&tasks, &criteria)), expected);
}

#[rstest]
fn dimensions_combine_as_a_conjunction() {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new()
        .with_status(TaskStatus::Done)
        .with_priority(TaskPriority::High)
        .with_issue_type(IssueType::Medical);
    assert_eq!(ids(&filter_tasks(&tasks, &criteria)), vec!["T5"]);
}

#[rstest]
fn multiple_values_in_one_dimension_are_alternatives() {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new()
        .with_priority(TaskPriority::High)
        .with_priority(TaskPriority::Low);
    assert_eq!(
        ids(&filter_tasks(&tasks, &criteria)),
        vec!["T1", "T3", "T4", "T5", "T6"]
    );
}

#[rstest]
fn date_range_excludes_undated_tasks() {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new().with_date_range(day(2024, 3, 9), day(2024, 3, 12));
    assert_eq!(
        ids(&filter_tasks(&tasks, &criteria)),
        vec!["T1", "T2", "T3", "T6", "T8"]
    );
}

#[rstest]
fn care_journey_restricts_to_one_journey() {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new()
        .with_care_journey(CareJourneyId::new("CJ-7").expect("valid journey"));
    assert_eq!(ids(&filter_tasks(&tasks, &criteria)), vec!["T5", "T6"]);
}

#[rstest]
fn filtering_is_idempotent() {
    let tasks = seed_tasks();
    let criteria = FilterCriteria::new()
        .with_status(TaskStatus::Todo)
        .with_search("s");
    let once = filter_tasks(&tasks, &criteria);
    let twice = filter_tasks(&once, &criteria);
    assert_eq!(once, twice);
}
