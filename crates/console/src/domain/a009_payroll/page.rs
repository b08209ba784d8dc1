//! Payroll page: per-period records with a mark-paid quick action.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a009_payroll::{
    PayrollDraft, PayrollId, PayrollRecord, PayrollStatus,
};

use crate::shared::collection::{Collection, CollectionError};
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::{Notifier, NotifyKind};

impl Searchable for PayrollRecord {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.employee_code, query)
            || contains_ci(&self.designation, query)
    }
}

/// Aggregate amounts for the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollTotals {
    pub net_total: i64,
    pub paid: usize,
    pub pending: usize,
}

pub struct PayrollPage {
    store: Collection<PayrollRecord>,
    search: String,
    status_filter: FilterChoice<PayrollStatus>,
    form: FormSession<PayrollId, PayrollDraft>,
    dispatcher: Dispatcher,
    /// Stamped on new records as the pay date
    today: NaiveDate,
}

impl PayrollPage {
    pub fn new(notifier: Rc<dyn Notifier>, today: NaiveDate) -> Self {
        Self {
            store: Collection::with_seed(seed_payroll()),
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

    pub fn set_status_filter(&mut self, filter: FilterChoice<PayrollStatus>) {
        self.status_filter = filter;
    }

    pub fn visible(&self) -> Vec<&PayrollRecord> {
        filter_list(self.store.all(), &self.search, |record| {
            self.status_filter.matches(&record.status)
        })
    }

    pub fn totals(&self) -> PayrollTotals {
        let all = self.store.all();
        PayrollTotals {
            net_total: all.iter().map(|r| r.net_salary).sum(),
            paid: all.iter().filter(|r| r.status == PayrollStatus::Paid).count(),
            pending: all
                .iter()
                .filter(|r| r.status == PayrollStatus::Pending)
                .count(),
        }
    }

    pub fn get(&self, id: PayrollId) -> Option<&PayrollRecord> {
        self.store.get(id)
    }

    /// Settle a pending record from the list row
    pub fn mark_paid(&mut self, id: PayrollId) -> Result<(), CollectionError> {
        match self.store.update(id, |record| record.mark_paid()) {
            Ok(_) => {
                self.dispatcher
                    .notifier()
                    .notify(NotifyKind::Success, "Payroll record marked as paid!");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %id.0, "mark paid failed: {err}");
                self.dispatcher
                    .notifier()
                    .notify(NotifyKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form.open_create(PayrollDraft::default());
    }

    pub fn open_edit(&mut self, id: PayrollId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, PayrollDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<PayrollId, PayrollDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut PayrollDraft> {
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
                let pay_date = self.today;
                self.dispatcher.submit_create(&mut self.store, |id| {
                    PayrollRecord::from_draft(id, &commit.draft, pay_date)
                });
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: PayrollId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_payroll() -> Vec<PayrollRecord> {
    let rows = [
        (
            1,
            "EMP001",
            "Brooklyn Simmons",
            "Project Manager",
            "Development",
            75_000,
            5_000,
            2_000,
            PayrollStatus::Paid,
            date(2024, 1, 31),
        ),
        (
            2,
            "EMP002",
            "Kathryn Murphy",
            "Team Lead",
            "Development",
            60_000,
            4_000,
            1_500,
            PayrollStatus::Paid,
            date(2024, 1, 31),
        ),
        (
            3,
            "EMP003",
            "Leslie Alexander",
            "Sr. UX Designer",
            "Design",
            55_000,
            3_500,
            1_200,
            PayrollStatus::Pending,
            date(2024, 2, 29),
        ),
        (
            4,
            "EMP004",
            "Cody Fisher",
            "Sales Executive",
            "Sales",
            45_000,
            6_000,
            1_000,
            PayrollStatus::Pending,
            date(2024, 2, 29),
        ),
    ];
    rows.into_iter()
        .map(
            |(id, code, name, designation, department, basic, allowances, deductions, status, pay)| {
                PayrollRecord {
                    id: PayrollId(id),
                    employee_code: code.into(),
                    name: name.into(),
                    designation: designation.into(),
                    department: department.into(),
                    basic_salary: basic,
                    allowances,
                    deductions,
                    net_salary: basic + allowances - deductions,
                    status,
                    pay_date: pay,
                }
            },
        )
        .collect()
}
