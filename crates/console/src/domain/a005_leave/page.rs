//! Leave request page: list with quick approve/reject actions alongside
//! the usual form-driven create and edit.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a005_leave::{Leave, LeaveDraft, LeaveId, LeaveStatus};

use crate::shared::collection::{Collection, CollectionError};
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::{Notifier, NotifyKind};

impl Searchable for Leave {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.employee_name, query) || contains_ci(&self.leave_type, query)
    }
}

pub struct LeavePage {
    store: Collection<Leave>,
    search: String,
    status_filter: FilterChoice<LeaveStatus>,
    form: FormSession<LeaveId, LeaveDraft>,
    dispatcher: Dispatcher,
    today: NaiveDate,
}

impl LeavePage {
    pub fn new(notifier: Rc<dyn Notifier>, today: NaiveDate) -> Self {
        Self {
            store: Collection::with_seed(seed_leaves()),
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

    pub fn set_status_filter(&mut self, filter: FilterChoice<LeaveStatus>) {
        self.status_filter = filter;
    }

    pub fn visible(&self) -> Vec<&Leave> {
        filter_list(self.store.all(), &self.search, |leave| {
            self.status_filter.matches(&leave.status)
        })
    }

    pub fn get(&self, id: LeaveId) -> Option<&Leave> {
        self.store.get(id)
    }

    pub fn pending_count(&self) -> usize {
        self.store
            .all()
            .iter()
            .filter(|leave| leave.status == LeaveStatus::Pending)
            .count()
    }

    // ========================================================================
    // Quick actions
    // ========================================================================

    /// Approve directly from the list row, no form involved
    pub fn approve(&mut self, id: LeaveId) -> Result<(), CollectionError> {
        self.set_status(id, LeaveStatus::Approved, "Leave request approved successfully!")
    }

    pub fn reject(&mut self, id: LeaveId) -> Result<(), CollectionError> {
        self.set_status(id, LeaveStatus::Rejected, "Leave request rejected successfully!")
    }

    fn set_status(
        &mut self,
        id: LeaveId,
        status: LeaveStatus,
        message: &str,
    ) -> Result<(), CollectionError> {
        match self.store.update(id, |leave| leave.status = status) {
            Ok(_) => {
                self.dispatcher
                    .notifier()
                    .notify(NotifyKind::Success, message);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %id.0, "status change failed: {err}");
                self.dispatcher
                    .notifier()
                    .notify(NotifyKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    // ========================================================================
    // Form session
    // ========================================================================

    pub fn open_create(&mut self) {
        self.form.open_create(LeaveDraft::default());
    }

    pub fn open_edit(&mut self, id: LeaveId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, LeaveDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<LeaveId, LeaveDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut LeaveDraft> {
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
                self.dispatcher.submit_create(&mut self.store, |id| {
                    Leave::from_draft(id, &commit.draft, today)
                });
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: LeaveId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_leaves() -> Vec<Leave> {
    let rows = [
        (
            1,
            "Robert Fox",
            "Sick Leave",
            date(2023, 7, 15),
            date(2023, 7, 17),
            "Medical treatment",
            LeaveStatus::Pending,
            date(2023, 7, 10),
        ),
        (
            2,
            "Jane Cooper",
            "Annual Leave",
            date(2023, 8, 1),
            date(2023, 8, 10),
            "Family vacation",
            LeaveStatus::Approved,
            date(2023, 7, 5),
        ),
        (
            3,
            "Wade Warren",
            "Casual Leave",
            date(2023, 7, 20),
            date(2023, 7, 20),
            "Personal errand",
            LeaveStatus::Pending,
            date(2023, 7, 12),
        ),
        (
            4,
            "Jenny Wilson",
            "Maternity Leave",
            date(2023, 9, 1),
            date(2023, 12, 1),
            "Maternity",
            LeaveStatus::Approved,
            date(2023, 6, 20),
        ),
        (
            5,
            "Guy Hawkins",
            "Sick Leave",
            date(2023, 7, 8),
            date(2023, 7, 9),
            "Flu",
            LeaveStatus::Rejected,
            date(2023, 7, 7),
        ),
    ];
    rows.into_iter()
        .map(
            |(id, name, leave_type, start, end, reason, status, applied)| Leave {
                id: LeaveId(id),
                employee_name: name.into(),
                leave_type: leave_type.into(),
                start_date: start,
                end_date: end,
                reason: reason.into(),
                status,
                applied_date: applied,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::RecordingNotifier;

    fn page() -> (LeavePage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = LeavePage::new(notifier.clone(), date(2023, 7, 14));
        (page, notifier)
    }

    #[test]
    fn approve_flips_status_and_confirms() {
        let (mut page, notifier) = page();
        page.approve(LeaveId(1)).unwrap();
        assert_eq!(page.get(LeaveId(1)).unwrap().status, LeaveStatus::Approved);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Leave request approved successfully!".into()))
        );
        assert_eq!(page.pending_count(), 1);
    }

    #[test]
    fn reject_flips_status_and_confirms() {
        let (mut page, notifier) = page();
        page.reject(LeaveId(3)).unwrap();
        assert_eq!(page.get(LeaveId(3)).unwrap().status, LeaveStatus::Rejected);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Leave request rejected successfully!".into()))
        );
    }

    #[test]
    fn approve_missing_id_is_loud() {
        let (mut page, notifier) = page();
        assert!(page.approve(LeaveId(50)).is_err());
        let (kind, message) = notifier.last().unwrap();
        assert_eq!(kind, NotifyKind::Error);
        assert!(message.contains("Leave request with id 50 not found"));
    }

    #[test]
    fn create_is_pending_and_submitted_today() {
        let (mut page, notifier) = page();
        page.open_create();
        *page.draft_mut().unwrap() = LeaveDraft {
            employee_name: "Kristin Watson".into(),
            leave_type: "Annual Leave".into(),
            start_date: Some(date(2023, 8, 14)),
            end_date: Some(date(2023, 8, 18)),
            reason: "Travel".into(),
        };
        assert!(page.submit());
        let created = page.get(LeaveId(6)).unwrap();
        assert_eq!(created.status, LeaveStatus::Pending);
        assert_eq!(created.applied_date, date(2023, 7, 14));
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Leave request submitted successfully!".into()))
        );
    }

    #[test]
    fn end_before_start_keeps_form_open() {
        let (mut page, _) = page();
        page.open_create();
        *page.draft_mut().unwrap() = LeaveDraft {
            employee_name: "Kristin Watson".into(),
            leave_type: "Annual Leave".into(),
            start_date: Some(date(2023, 8, 18)),
            end_date: Some(date(2023, 8, 14)),
            reason: "Travel".into(),
        };
        assert!(!page.submit());
        assert_eq!(
            page.form().errors().unwrap().message_for("endDate"),
            Some("End date must not be before start date")
        );
    }

    #[test]
    fn status_filter_shows_only_pending() {
        let (mut page, _) = page();
        page.set_status_filter(FilterChoice::Only(LeaveStatus::Pending));
        let names: Vec<_> = page
            .visible()
            .iter()
            .map(|l| l.employee_name.as_str())
            .collect();
        assert_eq!(names, ["Robert Fox", "Wade Warren"]);
    }
}
