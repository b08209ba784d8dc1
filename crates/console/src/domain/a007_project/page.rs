//! Project portfolio page.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a007_project::{
    Priority, Project, ProjectDraft, ProjectId, ProjectStatus,
};

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::Notifier;

impl Searchable for Project {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.team_lead, query)
    }
}

pub struct ProjectPage {
    store: Collection<Project>,
    search: String,
    status_filter: FilterChoice<ProjectStatus>,
    priority_filter: FilterChoice<Priority>,
    form: FormSession<ProjectId, ProjectDraft>,
    dispatcher: Dispatcher,
}

impl ProjectPage {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            store: Collection::with_seed(seed_projects()),
            search: String::new(),
            status_filter: FilterChoice::All,
            priority_filter: FilterChoice::All,
            form: FormSession::new(),
            dispatcher: Dispatcher::new(notifier),
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_status_filter(&mut self, filter: FilterChoice<ProjectStatus>) {
        self.status_filter = filter;
    }

    pub fn set_priority_filter(&mut self, filter: FilterChoice<Priority>) {
        self.priority_filter = filter;
    }

    pub fn visible(&self) -> Vec<&Project> {
        filter_list(self.store.all(), &self.search, |project| {
            self.status_filter.matches(&project.status)
                && self.priority_filter.matches(&project.priority)
        })
    }

    /// Options for the task form's project selector: id reference plus
    /// current display name
    pub fn options(&self) -> Vec<(ProjectId, &str)> {
        self.store
            .all()
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect()
    }

    /// Resolve a project reference to its current display name
    pub fn title_of(&self, id: ProjectId) -> Option<&str> {
        self.store.get(id).map(|p| p.name.as_str())
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.store.get(id)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(ProjectDraft::default());
    }

    pub fn open_edit(&mut self, id: ProjectId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, ProjectDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<ProjectId, ProjectDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProjectDraft> {
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
                    .submit_create(&mut self.store, |id| Project::from_draft(id, &commit.draft));
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: ProjectId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_projects() -> Vec<Project> {
    let rows = [
        (
            1,
            "HRMS Development",
            "Complete Human Resource Management System",
            date(2024, 8, 15),
            "$45,000",
            ProjectStatus::InProgress,
            Priority::High,
            "John Doe",
            65,
            6,
        ),
        (
            2,
            "Mobile App Redesign",
            "Redesign of the customer-facing mobile application",
            date(2024, 9, 30),
            "$30,000",
            ProjectStatus::Planning,
            Priority::Medium,
            "Jane Smith",
            10,
            4,
        ),
        (
            3,
            "Data Migration",
            "Migrate legacy records to the new platform",
            date(2024, 5, 31),
            "$15,000",
            ProjectStatus::Completed,
            Priority::Critical,
            "Mike Johnson",
            100,
            3,
        ),
        (
            4,
            "Marketing Website",
            "New marketing site with CMS integration",
            date(2024, 7, 1),
            "$20,000",
            ProjectStatus::OnHold,
            Priority::Low,
            "Sarah Wilson",
            40,
            2,
        ),
    ];
    rows.into_iter()
        .map(
            |(id, name, description, deadline, budget, status, priority, lead, progress, team)| {
                Project {
                    id: ProjectId(id),
                    name: name.into(),
                    description: description.into(),
                    deadline: Some(deadline),
                    budget: budget.into(),
                    status,
                    priority,
                    team_lead: lead.into(),
                    progress,
                    team_size: team,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::{NotifyKind, RecordingNotifier};

    fn page() -> (ProjectPage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = ProjectPage::new(notifier.clone());
        (page, notifier)
    }

    #[test]
    fn priority_filter_narrows() {
        let (mut page, _) = page();
        page.set_priority_filter(FilterChoice::Only(Priority::Critical));
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Data Migration");
    }

    #[test]
    fn fresh_project_starts_at_zero_progress() {
        let (mut page, notifier) = page();
        page.open_create();
        *page.draft_mut().unwrap() = ProjectDraft {
            name: "Intranet Portal".into(),
            description: "Internal knowledge base".into(),
            deadline: Some(date(2024, 12, 1)),
            budget: "$25,000".into(),
            status: ProjectStatus::Planning,
            priority: Priority::Medium,
            team_lead: "Jane Smith".into(),
        };
        assert!(page.submit());
        let created = page.get(ProjectId(5)).unwrap();
        assert_eq!(created.progress, 0);
        assert_eq!(created.team_size, 1);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Project created successfully!".into()))
        );
    }

    #[test]
    fn options_are_listed_in_store_order() {
        let (page, _) = page();
        assert_eq!(
            page.options(),
            [
                (ProjectId(1), "HRMS Development"),
                (ProjectId(2), "Mobile App Redesign"),
                (ProjectId(3), "Data Migration"),
                (ProjectId(4), "Marketing Website"),
            ]
        );
    }

    #[test]
    fn rename_is_visible_through_the_lookup() {
        let (mut page, _) = page();
        assert!(page.open_edit(ProjectId(3)));
        page.draft_mut().unwrap().name = "Platform Migration".into();
        assert!(page.submit());
        assert_eq!(page.title_of(ProjectId(3)), Some("Platform Migration"));
        assert_eq!(page.title_of(ProjectId(99)), None);
    }

    #[test]
    fn edit_keeps_progress_and_team_size() {
        let (mut page, _) = page();
        assert!(page.open_edit(ProjectId(1)));
        page.draft_mut().unwrap().status = ProjectStatus::OnHold;
        assert!(page.submit());
        let project = page.get(ProjectId(1)).unwrap();
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert_eq!(project.progress, 65);
        assert_eq!(project.team_size, 6);
    }
}
