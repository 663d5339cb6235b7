//! Board Logic
//!
//! Pure lane-partition and drag-move rules for the task-status board. The
//! component layer only projects these over its signals, so the rules are
//! testable without a DOM.

use leptos_dragdrop::CardKey;

use crate::models::{Task, TaskStatus};

/// The four fixed lanes, in column order.
pub const LANES: [TaskStatus; 4] = [
    TaskStatus::Todo,
    TaskStatus::Working,
    TaskStatus::Waiting,
    TaskStatus::Done,
];

/// A staged lane change: applied to the view immediately, committed to the
/// source list only once the status update round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub task_id: u64,
    pub status: TaskStatus,
}

/// Tasks visible under the current search term. An empty term shows every
/// task; otherwise only tasks whose project name equals the term.
fn visible<'a>(tasks: &'a [Task], search: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| search.is_empty() || task.project_name == search)
        .collect()
}

/// Tasks shown in one lane: explicit status matches first, and for the TODO
/// lane the never-assigned (`None` status) tasks appended after them.
pub fn lane_tasks(tasks: &[Task], search: &str, lane: TaskStatus) -> Vec<Task> {
    let visible = visible(tasks, search);
    let mut result: Vec<Task> = visible
        .iter()
        .filter(|task| task.status == Some(lane))
        .map(|task| (*task).clone())
        .collect();
    if lane == TaskStatus::Todo {
        result.extend(
            visible
                .iter()
                .filter(|task| task.status.is_none())
                .map(|task| (*task).clone()),
        );
    }
    result
}

/// View projection: the fetched task list with the staged move overlaid.
pub fn apply_override(tasks: &[Task], pending: Option<PendingMove>) -> Vec<Task> {
    let mut projected: Vec<Task> = tasks.to_vec();
    if let Some(mv) = pending {
        if let Some(task) = projected.iter_mut().find(|task| task.id_num == mv.task_id) {
            task.status = Some(mv.status);
        }
    }
    projected
}

/// Resolve a drop gesture into a staged move. Returns `None` for drops that
/// would not change the task's lane, or for stale card keys (the list can
/// refresh mid-drag).
pub fn resolve_move(
    tasks: &[Task],
    search: &str,
    from: CardKey,
    to_lane: usize,
) -> Option<PendingMove> {
    if from.lane == to_lane {
        return None;
    }
    let source_lane = *LANES.get(from.lane)?;
    let target_lane = *LANES.get(to_lane)?;
    let task = lane_tasks(tasks, search, source_lane).into_iter().nth(from.index)?;
    Some(PendingMove {
        task_id: task.id_num,
        status: target_lane,
    })
}

/// Commit a confirmed move into the source task list.
pub fn commit_move(tasks: &mut [Task], mv: PendingMove) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id_num == mv.task_id) {
        task.status = Some(mv.status);
    }
}

/// Per-lane task counts for one project, in `LANES` order.
pub fn project_lane_counts(tasks: &[Task], project_name: &str) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for (idx, lane) in LANES.iter().enumerate() {
        counts[idx] = lane_tasks(tasks, project_name, *lane).len();
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, project: &str, status: Option<TaskStatus>) -> Task {
        Task {
            id_num: id,
            task_name: format!("업무 {id}"),
            description: None,
            start_date: "2023-10-01".to_string(),
            end_date: "2023-10-31".to_string(),
            status,
            project_name: project.to_string(),
            task_group_id_num: None,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "MES 구축", Some(TaskStatus::Todo)),
            task(2, "MES 구축", Some(TaskStatus::Working)),
            task(3, "MES 구축", None),
            task(4, "설비 교체", Some(TaskStatus::Done)),
            task(5, "설비 교체", Some(TaskStatus::Waiting)),
            task(6, "설비 교체", None),
        ]
    }

    #[test]
    fn each_statused_task_lands_in_exactly_one_lane() {
        let tasks = sample();
        for t in tasks.iter().filter(|t| t.status.is_some()) {
            let lanes_holding: Vec<_> = LANES
                .iter()
                .filter(|lane| {
                    lane_tasks(&tasks, "", **lane)
                        .iter()
                        .any(|lt| lt.id_num == t.id_num)
                })
                .collect();
            assert_eq!(lanes_holding.len(), 1, "task {} in {:?}", t.id_num, lanes_holding);
            assert_eq!(Some(*lanes_holding[0]), t.status);
        }
    }

    #[test]
    fn null_status_lands_in_todo_lane_only() {
        let tasks = sample();
        let todo = lane_tasks(&tasks, "", TaskStatus::Todo);
        assert!(todo.iter().any(|t| t.id_num == 3));
        assert!(todo.iter().any(|t| t.id_num == 6));
        for lane in &LANES[1..] {
            assert!(lane_tasks(&tasks, "", *lane).iter().all(|t| t.status == Some(*lane)));
        }
        // explicit TODO matches come before the unassigned ones
        assert_eq!(todo.first().unwrap().id_num, 1);
    }

    #[test]
    fn search_term_restricts_to_exact_project_name() {
        let tasks = sample();
        let all: usize = LANES.iter().map(|l| lane_tasks(&tasks, "", *l).len()).sum();
        assert_eq!(all, tasks.len());

        let filtered: Vec<u64> = LANES
            .iter()
            .flat_map(|l| lane_tasks(&tasks, "설비 교체", *l))
            .map(|t| t.id_num)
            .collect();
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|id| [4, 5, 6].contains(id)));

        // no substring matching
        assert!(LANES.iter().all(|l| lane_tasks(&tasks, "설비", *l).is_empty()));
    }

    #[test]
    fn resolve_move_targets_dropped_lane_and_leaves_others_alone() {
        let tasks = sample();
        // TODO lane ordering: [1 (explicit), 3, 6 (unassigned)]; drag index 1 → WAITING
        let mv = resolve_move(&tasks, "", CardKey { lane: 0, index: 1 }, 2).unwrap();
        assert_eq!(mv, PendingMove { task_id: 3, status: TaskStatus::Waiting });

        let mut updated = tasks.clone();
        commit_move(&mut updated, mv);
        assert_eq!(updated[2].status, Some(TaskStatus::Waiting));
        for (before, after) in tasks.iter().zip(&updated) {
            if before.id_num != 3 {
                assert_eq!(before.status, after.status);
            }
        }
    }

    #[test]
    fn same_lane_drop_is_a_no_op() {
        let tasks = sample();
        assert!(resolve_move(&tasks, "", CardKey { lane: 1, index: 0 }, 1).is_none());
    }

    #[test]
    fn stale_card_key_resolves_to_none() {
        let tasks = sample();
        assert!(resolve_move(&tasks, "", CardKey { lane: 3, index: 9 }, 0).is_none());
        assert!(resolve_move(&tasks, "", CardKey { lane: 7, index: 0 }, 0).is_none());
    }

    #[test]
    fn override_projects_without_touching_source() {
        let tasks = sample();
        let projected = apply_override(
            &tasks,
            Some(PendingMove { task_id: 1, status: TaskStatus::Done }),
        );
        assert_eq!(projected[0].status, Some(TaskStatus::Done));
        assert_eq!(tasks[0].status, Some(TaskStatus::Todo));
        // no pending move: projection is identity
        assert_eq!(apply_override(&tasks, None), tasks);
    }

    #[test]
    fn project_lane_counts_partition_the_project() {
        let tasks = sample();
        let counts = project_lane_counts(&tasks, "MES 구축");
        assert_eq!(counts, [2, 1, 0, 0]);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }
}
