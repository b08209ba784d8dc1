//! Kanban task board.
//!
//! The board is a single store viewed through one lens per column; moving a
//! card is a status change, not a removal and re-insert, so a moved card
//! keeps its id and its relative order among survivors. Cards reference
//! projects by id; display names come from a directory lookup, so renaming
//! a project shows up on every card without touching the tasks.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a007_project::{Priority, ProjectId};
use contracts::domain::a008_task::{BoardColumn, Task, TaskDraft, TaskId};

use crate::shared::collection::{Collection, CollectionError};
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::{Notifier, NotifyKind};

impl Searchable for Task {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.title, query) || contains_ci(&self.assignee, query)
    }
}

pub struct TaskBoardPage {
    store: Collection<Task>,
    /// Project selector options: id plus current display name
    projects: Vec<(ProjectId, String)>,
    search: String,
    priority_filter: FilterChoice<Priority>,
    project_filter: FilterChoice<ProjectId>,
    form: FormSession<TaskId, TaskDraft>,
    dispatcher: Dispatcher,
}

impl TaskBoardPage {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            store: Collection::with_seed(seed_tasks()),
            projects: seed_project_directory(),
            search: String::new(),
            priority_filter: FilterChoice::All,
            project_filter: FilterChoice::All,
            form: FormSession::new(),
            dispatcher: Dispatcher::new(notifier),
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_priority_filter(&mut self, filter: FilterChoice<Priority>) {
        self.priority_filter = filter;
    }

    pub fn set_project_filter(&mut self, filter: FilterChoice<ProjectId>) {
        self.project_filter = filter;
    }

    /// Resolve a card's project reference to its display name
    pub fn project_title(&self, id: ProjectId) -> Option<&str> {
        self.projects
            .iter()
            .find(|(project_id, _)| *project_id == id)
            .map(|(_, name)| name.as_str())
    }

    pub fn project_options(&self) -> &[(ProjectId, String)] {
        &self.projects
    }

    /// Apply a rename coming from the project page; cards pick it up via
    /// the lookup, no per-card writes
    pub fn rename_project(&mut self, id: ProjectId, name: impl Into<String>) {
        if let Some(entry) = self.projects.iter_mut().find(|(project_id, _)| *project_id == id) {
            entry.1 = name.into();
        }
    }

    /// Cards of one column, after search and filters
    pub fn tasks_in(&self, column: BoardColumn) -> Vec<&Task> {
        filter_list(self.store.all(), &self.search, |task| {
            task.status == column
                && self.priority_filter.matches(&task.priority)
                && self.project_filter.matches(&task.project)
        })
    }

    pub fn column_counts(&self) -> [(BoardColumn, usize); 4] {
        BoardColumn::ALL.map(|column| {
            let count = self
                .store
                .all()
                .iter()
                .filter(|t| t.status == column)
                .count();
            (column, count)
        })
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Move a card to another column; the only way status changes
    pub fn move_task(&mut self, id: TaskId, to: BoardColumn) -> Result<(), CollectionError> {
        match self.store.update(id, |task| task.status = to) {
            Ok(_) => {
                tracing::debug!(id = %id.0, column = to.as_str(), "task moved");
                self.dispatcher
                    .notifier()
                    .notify(NotifyKind::Success, "Task moved successfully!");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %id.0, "move failed: {err}");
                self.dispatcher
                    .notifier()
                    .notify(NotifyKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form.open_create(TaskDraft::default());
    }

    pub fn open_edit(&mut self, id: TaskId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, TaskDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<TaskId, TaskDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn submit(&mut self) -> bool {
        let Some(commit) = self.form.submit() else {
            return false;
        };
        match commit.mode {
            FormMode::Create => {
                self.dispatcher
                    .submit_create(&mut self.store, |id| Task::from_draft(id, &commit.draft));
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: TaskId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_project_directory() -> Vec<(ProjectId, String)> {
    vec![
        (ProjectId(1), "HRMS Development".into()),
        (ProjectId(2), "Mobile App Redesign".into()),
        (ProjectId(3), "Data Migration".into()),
    ]
}

fn seed_tasks() -> Vec<Task> {
    let rows = [
        (
            1,
            "Design User Authentication Flow",
            "Create wireframes and mockups for login/signup process",
            "John Doe",
            Priority::High,
            date(2024, 7, 15),
            ProjectId(1),
            BoardColumn::ToDo,
        ),
        (
            2,
            "Implement Employee Directory API",
            "REST endpoints for listing and searching employees",
            "Jane Smith",
            Priority::Critical,
            date(2024, 7, 10),
            ProjectId(1),
            BoardColumn::InProgress,
        ),
        (
            3,
            "Set Up Analytics Dashboard",
            "Track usage metrics in the redesigned app",
            "Mike Johnson",
            Priority::Medium,
            date(2024, 7, 20),
            ProjectId(2),
            BoardColumn::InProgress,
        ),
        (
            4,
            "Write Migration Scripts",
            "Transform legacy records into the new schema",
            "Sarah Wilson",
            Priority::High,
            date(2024, 5, 25),
            ProjectId(3),
            BoardColumn::Review,
        ),
        (
            5,
            "Verify Migrated Totals",
            "Spot-check payroll totals against the legacy system",
            "Sarah Wilson",
            Priority::Critical,
            date(2024, 5, 30),
            ProjectId(3),
            BoardColumn::Done,
        ),
    ];
    rows.into_iter()
        .map(
            |(id, title, description, assignee, priority, due, project, status)| Task {
                id: TaskId(id),
                title: title.into(),
                description: description.into(),
                assignee: assignee.into(),
                priority,
                due_date: Some(due),
                project,
                status,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::RecordingNotifier;

    fn page() -> (TaskBoardPage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = TaskBoardPage::new(notifier.clone());
        (page, notifier)
    }

    #[test]
    fn columns_partition_the_board() {
        let (page, _) = page();
        let counts = page.column_counts();
        assert_eq!(counts[0], (BoardColumn::ToDo, 1));
        assert_eq!(counts[1], (BoardColumn::InProgress, 2));
        assert_eq!(counts[2], (BoardColumn::Review, 1));
        assert_eq!(counts[3], (BoardColumn::Done, 1));
    }

    #[test]
    fn move_task_changes_only_the_column() {
        let (mut page, notifier) = page();
        page.move_task(TaskId(1), BoardColumn::InProgress).unwrap();
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Task moved successfully!".into()))
        );
        let task = page.get(TaskId(1)).unwrap();
        assert_eq!(task.status, BoardColumn::InProgress);
        assert_eq!(task.assignee, "John Doe");
        // Column views follow store order; the move does not re-sort
        let titles: Vec<_> = page
            .tasks_in(BoardColumn::InProgress)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(
            titles,
            [
                "Design User Authentication Flow",
                "Implement Employee Directory API",
                "Set Up Analytics Dashboard",
            ]
        );
    }

    #[test]
    fn move_missing_task_is_not_found() {
        let (mut page, _) = page();
        let err = page.move_task(TaskId(40), BoardColumn::Done).unwrap_err();
        assert_eq!(
            err,
            CollectionError::NotFound {
                entity: "Task",
                id: "40".into(),
            }
        );
    }

    #[test]
    fn new_task_lands_in_todo() {
        let (mut page, notifier) = page();
        page.open_create();
        *page.draft_mut().unwrap() = TaskDraft {
            title: "Add Audit Logging".into(),
            description: "Record every admin mutation".into(),
            assignee: "Jane Smith".into(),
            priority: Priority::Medium,
            due_date: Some(date(2024, 8, 1)),
            project: Some(ProjectId(1)),
        };
        assert!(page.submit());
        let todo = page.tasks_in(BoardColumn::ToDo);
        assert_eq!(todo.len(), 2);
        assert_eq!(todo[1].title, "Add Audit Logging");
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Task created successfully!".into()))
        );
    }

    #[test]
    fn editing_a_card_does_not_move_it() {
        let (mut page, _) = page();
        assert!(page.open_edit(TaskId(4)));
        page.draft_mut().unwrap().assignee = "Mike Johnson".into();
        assert!(page.submit());
        let task = page.get(TaskId(4)).unwrap();
        assert_eq!(task.status, BoardColumn::Review);
        assert_eq!(task.assignee, "Mike Johnson");
    }

    #[test]
    fn project_filter_applies_per_column() {
        let (mut page, _) = page();
        page.set_project_filter(FilterChoice::Only(ProjectId(3)));
        assert_eq!(page.tasks_in(BoardColumn::Review).len(), 1);
        assert_eq!(page.tasks_in(BoardColumn::InProgress).len(), 0);
    }

    #[test]
    fn renaming_a_project_cascades_through_the_lookup() {
        let (mut page, _) = page();
        let card = page.get(TaskId(4)).unwrap();
        assert_eq!(page.project_title(card.project), Some("Data Migration"));

        page.rename_project(ProjectId(3), "Platform Migration");
        let card = page.get(TaskId(4)).unwrap();
        assert_eq!(page.project_title(card.project), Some("Platform Migration"));
    }

    #[test]
    fn unknown_project_reference_has_no_title() {
        let (page, _) = page();
        assert_eq!(page.project_title(ProjectId(99)), None);
    }

    #[test]
    fn search_filters_cards_by_title_or_assignee() {
        let (mut page, _) = page();
        page.set_search("sarah");
        assert_eq!(page.tasks_in(BoardColumn::Review).len(), 1);
        assert_eq!(page.tasks_in(BoardColumn::Done).len(), 1);
        assert_eq!(page.tasks_in(BoardColumn::ToDo).len(), 0);
    }
}
