//! Daily attendance sheet.

use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a010_attendance::{
    AttendanceDraft, AttendanceId, AttendanceRecord, AttendanceStatus,
};

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::Notifier;

impl Searchable for AttendanceRecord {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}

pub struct AttendancePage {
    store: Collection<AttendanceRecord>,
    search: String,
    status_filter: FilterChoice<AttendanceStatus>,
    form: FormSession<AttendanceId, AttendanceDraft>,
    dispatcher: Dispatcher,
}

impl AttendancePage {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            store: Collection::with_seed(seed_attendance()),
            search: String::new(),
            status_filter: FilterChoice::All,
            form: FormSession::new(),
            dispatcher: Dispatcher::new(notifier),
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_status_filter(&mut self, filter: FilterChoice<AttendanceStatus>) {
        self.status_filter = filter;
    }

    pub fn visible(&self) -> Vec<&AttendanceRecord> {
        filter_list(self.store.all(), &self.search, |record| {
            self.status_filter.matches(&record.status)
        })
    }

    pub fn get(&self, id: AttendanceId) -> Option<&AttendanceRecord> {
        self.store.get(id)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(AttendanceDraft::default());
    }

    pub fn open_edit(&mut self, id: AttendanceId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, AttendanceDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<AttendanceId, AttendanceDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut AttendanceDraft> {
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
                self.dispatcher.submit_create(&mut self.store, |id| {
                    AttendanceRecord::from_draft(id, &commit.draft)
                });
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: AttendanceId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn at(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn seed_attendance() -> Vec<AttendanceRecord> {
    let rows = [
        (
            1,
            "John Doe",
            date(2024, 6, 15),
            at(9, 0),
            at(17, 0),
            AttendanceStatus::Present,
        ),
        (
            2,
            "Jane Smith",
            date(2024, 6, 15),
            at(10, 30),
            at(18, 0),
            AttendanceStatus::Late,
        ),
        (
            3,
            "Bob Johnson",
            date(2024, 6, 15),
            at(9, 0),
            at(13, 30),
            AttendanceStatus::HalfDay,
        ),
        (
            4,
            "Alice Brown",
            date(2024, 6, 15),
            None,
            None,
            AttendanceStatus::Absent,
        ),
    ];
    rows.into_iter()
        .map(|(id, name, day, check_in, check_out, status)| AttendanceRecord {
            id: AttendanceId(id),
            name: name.into(),
            date: day,
            check_in,
            check_out,
            status,
        })
        .collect()
}
