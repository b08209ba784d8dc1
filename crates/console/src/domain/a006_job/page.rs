//! Job postings page.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a006_job::{Job, JobDraft, JobId, JobStatus, JobType};

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::Notifier;

impl Searchable for Job {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.title, query)
            || contains_ci(&self.department, query)
            || contains_ci(&self.location, query)
    }
}

/// Postings broken down by publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub drafts: usize,
    pub applicants: u32,
}

pub struct JobPage {
    store: Collection<Job>,
    search: String,
    status_filter: FilterChoice<JobStatus>,
    type_filter: FilterChoice<JobType>,
    form: FormSession<JobId, JobDraft>,
    dispatcher: Dispatcher,
    today: NaiveDate,
}

impl JobPage {
    pub fn new(notifier: Rc<dyn Notifier>, today: NaiveDate) -> Self {
        Self {
            store: Collection::with_seed(seed_jobs()),
            search: String::new(),
            status_filter: FilterChoice::All,
            type_filter: FilterChoice::All,
            form: FormSession::new(),
            dispatcher: Dispatcher::new(notifier),
            today,
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_status_filter(&mut self, filter: FilterChoice<JobStatus>) {
        self.status_filter = filter;
    }

    pub fn set_type_filter(&mut self, filter: FilterChoice<JobType>) {
        self.type_filter = filter;
    }

    pub fn visible(&self) -> Vec<&Job> {
        filter_list(self.store.all(), &self.search, |job| {
            self.status_filter.matches(&job.status) && self.type_filter.matches(&job.job_type)
        })
    }

    pub fn stats(&self) -> JobStats {
        let all = self.store.all();
        JobStats {
            total: all.len(),
            open: all.iter().filter(|j| j.status == JobStatus::Open).count(),
            closed: all.iter().filter(|j| j.status == JobStatus::Closed).count(),
            drafts: all.iter().filter(|j| j.status == JobStatus::Draft).count(),
            applicants: all.iter().map(|j| j.applicants).sum(),
        }
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.store.get(id)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(JobDraft::default());
    }

    pub fn open_edit(&mut self, id: JobId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, JobDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<JobId, JobDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut JobDraft> {
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
                    .submit_create(&mut self.store, |id| Job::from_draft(id, &commit.draft, today));
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: JobId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_jobs() -> Vec<Job> {
    let rows = [
        (
            1,
            "Senior Frontend Developer",
            "Engineering",
            "New York, NY",
            JobType::FullTime,
            JobStatus::Open,
            "$80,000 - $120,000",
            date(2024, 1, 15),
            date(2024, 2, 15),
            "We are looking for a Senior Frontend Developer to join our team.",
            "5+ years of React experience",
            "Health insurance, 401k",
            24,
        ),
        (
            2,
            "HR Business Partner",
            "Human Resources",
            "Chicago, IL",
            JobType::FullTime,
            JobStatus::Open,
            "$65,000 - $85,000",
            date(2024, 1, 10),
            date(2024, 2, 10),
            "Partner with leadership on people strategy.",
            "3+ years of HR generalist experience",
            "Health insurance, remote Fridays",
            11,
        ),
        (
            3,
            "Marketing Intern",
            "Marketing & Sales",
            "Remote",
            JobType::PartTime,
            JobStatus::Closed,
            "$20/hour",
            date(2023, 11, 1),
            date(2023, 12, 1),
            "Support the growth team with campaign analytics.",
            "Currently enrolled student",
            "Flexible hours",
            47,
        ),
        (
            4,
            "DevOps Engineer",
            "Engineering",
            "Austin, TX",
            JobType::Contract,
            JobStatus::Draft,
            "$70/hour",
            date(2024, 1, 20),
            date(2024, 3, 1),
            "Own the CI/CD pipeline and cloud infrastructure.",
            "Kubernetes and Terraform in production",
            "Contract extension possible",
            0,
        ),
    ];
    rows.into_iter()
        .map(
            |(
                id,
                title,
                department,
                location,
                job_type,
                status,
                salary,
                posted,
                deadline,
                description,
                requirements,
                benefits,
                applicants,
            )| Job {
                id: JobId(id),
                title: title.into(),
                department: department.into(),
                location: location.into(),
                job_type,
                status,
                salary: salary.into(),
                posted_date: posted,
                deadline: Some(deadline),
                description: description.into(),
                requirements: requirements.into(),
                benefits: benefits.into(),
                applicants,
            },
        )
        .collect()
}
