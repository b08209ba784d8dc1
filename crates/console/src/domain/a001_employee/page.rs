//! Employee directory page: searchable card list, staged create form,
//! redirect back to the list after a successful create.

use std::collections::HashSet;
use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a001_employee::{
    Employee, EmployeeDraft, EmployeeId, EmployeeStatus, WorkType,
};
use contracts::domain::common::Validate;

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, Stage, StagedForm};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::{Navigator, Notifier};

/// Stages of the employee form, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStage {
    Personal,
    Professional,
    Documents,
    Access,
}

impl Stage for EmployeeStage {
    const ALL: &'static [Self] = &[
        Self::Personal,
        Self::Professional,
        Self::Documents,
        Self::Access,
    ];

    fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Professional => "Professional",
            Self::Documents => "Documents",
            Self::Access => "Access",
        }
    }
}

impl Searchable for Employee {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name(), query)
            || contains_ci(&self.email, query)
            || contains_ci(&self.designation, query)
    }
}

/// Counters for the stat cards above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub departments: usize,
}

pub struct EmployeePage {
    store: Collection<Employee>,
    search: String,
    department_filter: FilterChoice<String>,
    status_filter: FilterChoice<EmployeeStatus>,
    form: StagedForm<EmployeeStage, EmployeeId, EmployeeDraft>,
    dispatcher: Dispatcher,
    navigator: Rc<dyn Navigator>,
}

impl EmployeePage {
    pub fn new(notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            store: Collection::with_seed(seed_employees()),
            search: String::new(),
            department_filter: FilterChoice::All,
            status_filter: FilterChoice::All,
            form: StagedForm::new(),
            dispatcher: Dispatcher::new(notifier),
            navigator,
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_department_filter(&mut self, filter: FilterChoice<String>) {
        self.department_filter = filter;
    }

    pub fn set_status_filter(&mut self, filter: FilterChoice<EmployeeStatus>) {
        self.status_filter = filter;
    }

    /// Visible subset, recomputed on every call
    pub fn visible(&self) -> Vec<&Employee> {
        filter_list(self.store.all(), &self.search, |employee| {
            self.department_filter.matches(&employee.department)
                && self.status_filter.matches(&employee.status)
        })
    }

    pub fn stats(&self) -> EmployeeStats {
        let all = self.store.all();
        let departments: HashSet<&str> = all.iter().map(|e| e.department.as_str()).collect();
        EmployeeStats {
            total: all.len(),
            active: all.iter().filter(|e| e.status == EmployeeStatus::Active).count(),
            on_leave: all.iter().filter(|e| e.status == EmployeeStatus::OnLeave).count(),
            departments: departments.len(),
        }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.store.get(id)
    }

    // ========================================================================
    // Form session
    // ========================================================================

    pub fn open_create(&mut self) {
        self.form.open_create(EmployeeDraft::default());
    }

    /// Open the form pre-populated from the record; false if the id is gone
    pub fn open_edit(&mut self, id: EmployeeId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, EmployeeDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &StagedForm<EmployeeStage, EmployeeId, EmployeeDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut EmployeeDraft> {
        self.form.draft_mut()
    }

    pub fn next_stage(&mut self) {
        self.form.next();
    }

    pub fn previous_stage(&mut self) {
        self.form.previous();
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Commit the form; true if the store was mutated
    pub fn submit(&mut self) -> bool {
        let Some(commit) = self.form.submit() else {
            return false;
        };
        match commit.mode {
            FormMode::Create => {
                self.dispatcher
                    .submit_create(&mut self.store, |id| Employee::from_draft(id, &commit.draft));
                // Create flow lives on its own screen; go back to the list
                self.navigator.navigate_to("/employees");
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: EmployeeId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

// ============================================================================
// Seed data
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed(
    id: u64,
    code: &str,
    first: &str,
    last: &str,
    email: &str,
    phone: &str,
    designation: &str,
    department: &str,
    join_date: NaiveDate,
    salary: &str,
    status: EmployeeStatus,
) -> Employee {
    let draft = EmployeeDraft {
        employee_code: code.into(),
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        phone: phone.into(),
        designation: designation.into(),
        department: department.into(),
        work_type: WorkType::Office,
        join_date: Some(join_date),
        salary: salary.into(),
        ..Default::default()
    };
    debug_assert!(draft.validate().is_ok());
    let mut employee = Employee::from_draft(EmployeeId(id), &draft);
    employee.status = status;
    employee
}

fn seed_employees() -> Vec<Employee> {
    vec![
        seed(
            1,
            "EMP001",
            "John",
            "Doe",
            "john.doe@company.com",
            "+1 (555) 123-4567",
            "Software Engineer",
            "Information Technology",
            date(2023, 1, 15),
            "$75,000",
            EmployeeStatus::Active,
        ),
        seed(
            2,
            "EMP002",
            "Jane",
            "Smith",
            "jane.smith@company.com",
            "+1 (555) 234-5678",
            "HR Manager",
            "Human Resources",
            date(2022, 8, 20),
            "$85,000",
            EmployeeStatus::Active,
        ),
        seed(
            3,
            "EMP003",
            "Mike",
            "Johnson",
            "mike.johnson@company.com",
            "+1 (555) 345-6789",
            "Marketing Specialist",
            "Marketing & Sales",
            date(2023, 3, 10),
            "$60,000",
            EmployeeStatus::OnLeave,
        ),
        seed(
            4,
            "EMP004",
            "Sarah",
            "Wilson",
            "sarah.wilson@company.com",
            "+1 (555) 456-7890",
            "Financial Analyst",
            "Finance & Accounting",
            date(2022, 11, 5),
            "$70,000",
            EmployeeStatus::Active,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::{NotifyKind, RecordingNavigator, RecordingNotifier};

    fn page() -> (EmployeePage, Rc<RecordingNotifier>, Rc<RecordingNavigator>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let navigator = Rc::new(RecordingNavigator::new());
        let page = EmployeePage::new(notifier.clone(), navigator.clone());
        (page, notifier, navigator)
    }

    #[test]
    fn search_matches_name_email_or_designation() {
        let (mut page, _, _) = page();
        page.set_search("hr manager");
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].employee_code, "EMP002");

        page.set_search("company.com");
        assert_eq!(page.visible().len(), 4);
    }

    #[test]
    fn filters_combine_with_and() {
        let (mut page, _, _) = page();
        page.set_search("o");
        page.set_status_filter(FilterChoice::Only(EmployeeStatus::Active));
        page.set_department_filter(FilterChoice::Only("Information Technology".into()));
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "John");
    }

    #[test]
    fn stats_count_statuses_and_distinct_departments() {
        let (page, _, _) = page();
        let stats = page.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.on_leave, 1);
        assert_eq!(stats.departments, 4);
    }

    #[test]
    fn staged_create_redirects_to_list() {
        let (mut page, notifier, navigator) = page();
        page.open_create();
        {
            let draft = page.draft_mut().unwrap();
            draft.first_name = "Alice".into();
            draft.last_name = "Brown".into();
            draft.email = "alice.brown@company.com".into();
            draft.phone = "+1 (555) 987-6543".into();
        }
        page.next_stage();
        {
            let draft = page.draft_mut().unwrap();
            draft.employee_code = "EMP005".into();
            draft.designation = "QA Engineer".into();
            draft.department = "Information Technology".into();
        }
        // Submit is ignored before the final stage
        assert!(!page.submit());
        page.next_stage();
        page.next_stage();
        assert!(page.form().is_final_stage());
        assert!(page.submit());

        assert_eq!(page.stats().total, 5);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Employee created successfully!".into()))
        );
        assert_eq!(navigator.paths(), ["/employees"]);
    }

    #[test]
    fn validation_failure_keeps_form_open_and_store_unchanged() {
        let (mut page, notifier, _) = page();
        page.open_create();
        page.next_stage();
        page.next_stage();
        page.next_stage();
        assert!(!page.submit());
        assert!(page.form().is_open());
        assert_eq!(page.stats().total, 4);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn edit_round_trip_without_changes_is_identity() {
        let (mut page, _, _) = page();
        let before = page.get(EmployeeId(2)).unwrap().clone();
        assert!(page.open_edit(EmployeeId(2)));
        page.next_stage();
        page.next_stage();
        page.next_stage();
        assert!(page.submit());
        assert_eq!(page.get(EmployeeId(2)).unwrap(), &before);
    }

    #[test]
    fn delete_removes_and_confirms() {
        let (mut page, notifier, _) = page();
        page.delete(EmployeeId(3));
        assert_eq!(page.stats().total, 3);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Employee deleted successfully!".into()))
        );
    }

    #[test]
    fn delete_missing_id_raises_error_toast() {
        let (mut page, notifier, _) = page();
        page.delete(EmployeeId(99));
        assert_eq!(page.stats().total, 4);
        let (kind, _) = notifier.last().unwrap();
        assert_eq!(kind, NotifyKind::Error);
    }

    #[test]
    fn open_edit_missing_id_reports_false() {
        let (mut page, _, _) = page();
        assert!(!page.open_edit(EmployeeId(42)));
        assert!(!page.form().is_open());
    }
}
