//! Department list page with a single-step modal form.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a002_department::{
    Department, DepartmentDraft, DepartmentId, DepartmentStatus,
};

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::Notifier;

impl Searchable for Department {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.head, query)
    }
}

pub struct DepartmentPage {
    store: Collection<Department>,
    search: String,
    status_filter: FilterChoice<DepartmentStatus>,
    form: FormSession<DepartmentId, DepartmentDraft>,
    dispatcher: Dispatcher,
    /// Fixed at construction so a page opened before midnight stays consistent
    today: NaiveDate,
}

impl DepartmentPage {
    pub fn new(notifier: Rc<dyn Notifier>, today: NaiveDate) -> Self {
        Self {
            store: Collection::with_seed(seed_departments()),
            search: String::new(),
            status_filter: FilterChoice::All,
            form: FormSession::new(),
            dispatcher: Dispatcher::new(notifier),
            today,
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_status_filter(&mut self, filter: FilterChoice<DepartmentStatus>) {
        self.status_filter = filter;
    }

    pub fn visible(&self) -> Vec<&Department> {
        filter_list(self.store.all(), &self.search, |dept| {
            self.status_filter.matches(&dept.status)
        })
    }

    pub fn get(&self, id: DepartmentId) -> Option<&Department> {
        self.store.get(id)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(DepartmentDraft::default());
    }

    pub fn open_edit(&mut self, id: DepartmentId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, DepartmentDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<DepartmentId, DepartmentDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut DepartmentDraft> {
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
                let today = self.today;
                self.dispatcher
                    .submit_create(&mut self.store, |id| {
                        Department::from_draft(id, &commit.draft, today)
                    });
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: DepartmentId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_departments() -> Vec<Department> {
    let rows = [
        (
            1,
            "Human Resources",
            "Manages employee relations, recruitment, and organizational development",
            "Sarah Johnson",
            12,
            "Floor 2, Building A",
            "$150,000",
            date(2020, 1, 15),
        ),
        (
            2,
            "Information Technology",
            "Handles software development, infrastructure, and technical support",
            "Michael Chen",
            25,
            "Floor 3, Building B",
            "$500,000",
            date(2019, 6, 10),
        ),
        (
            3,
            "Finance & Accounting",
            "Manages financial planning, budgeting, and accounting operations",
            "Emily Rodriguez",
            8,
            "Floor 1, Building A",
            "$200,000",
            date(2020, 3, 22),
        ),
        (
            4,
            "Marketing & Sales",
            "Drives brand awareness, customer acquisition, and revenue growth",
            "David Thompson",
            15,
            "Floor 2, Building C",
            "$300,000",
            date(2019, 11, 8),
        ),
    ];
    rows.into_iter()
        .map(
            |(id, name, description, head, count, location, budget, established)| Department {
                id: DepartmentId(id),
                name: name.into(),
                description: description.into(),
                head: head.into(),
                employee_count: count,
                location: location.into(),
                budget: budget.into(),
                established,
                status: DepartmentStatus::Active,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::{NotifyKind, RecordingNotifier};

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    fn page() -> (DepartmentPage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = DepartmentPage::new(notifier.clone(), today());
        (page, notifier)
    }

    #[test]
    fn search_by_name_or_head() {
        let (mut page, _) = page();
        page.set_search("chen");
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Information Technology");
    }

    #[test]
    fn created_department_uses_page_date_and_zero_count() {
        let (mut page, notifier) = page();
        page.open_create();
        *page.draft_mut().unwrap() = DepartmentDraft {
            name: "Legal".into(),
            description: "Contracts and compliance".into(),
            head: "Ann Clark".into(),
            location: "Floor 1, Building A".into(),
            budget: "$120,000".into(),
        };
        assert!(page.submit());
        let created = page.visible().into_iter().find(|d| d.name == "Legal").unwrap();
        assert_eq!(created.established, today());
        assert_eq!(created.employee_count, 0);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Department created successfully!".into()))
        );
    }

    #[test]
    fn invalid_submit_reports_per_field() {
        let (mut page, _) = page();
        page.open_create();
        assert!(!page.submit());
        let errors = page.form().errors().unwrap();
        assert_eq!(errors.message_for("name"), Some("Department name is required"));
        assert!(page.form().is_open());
    }

    #[test]
    fn edit_preserves_employee_count() {
        let (mut page, _) = page();
        assert!(page.open_edit(DepartmentId(2)));
        page.draft_mut().unwrap().budget = "$550,000".into();
        assert!(page.submit());
        let dept = page.get(DepartmentId(2)).unwrap();
        assert_eq!(dept.budget, "$550,000");
        assert_eq!(dept.employee_count, 25);
    }

    #[test]
    fn delete_missing_is_loud() {
        let (mut page, notifier) = page();
        page.delete(DepartmentId(77));
        let (kind, message) = notifier.last().unwrap();
        assert_eq!(kind, NotifyKind::Error);
        assert!(message.contains("Department with id 77 not found"));
    }
}
