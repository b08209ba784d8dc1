//! Candidate pipeline page.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a003_candidate::{Candidate, CandidateDraft, CandidateId, CandidateStatus};

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::Notifier;

impl Searchable for Candidate {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.position, query)
            || contains_ci(&self.email, query)
    }
}

pub struct CandidatePage {
    store: Collection<Candidate>,
    search: String,
    status_filter: FilterChoice<CandidateStatus>,
    form: FormSession<CandidateId, CandidateDraft>,
    dispatcher: Dispatcher,
    today: NaiveDate,
}

impl CandidatePage {
    pub fn new(notifier: Rc<dyn Notifier>, today: NaiveDate) -> Self {
        Self {
            store: Collection::with_seed(seed_candidates()),
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

    pub fn set_status_filter(&mut self, filter: FilterChoice<CandidateStatus>) {
        self.status_filter = filter;
    }

    pub fn visible(&self) -> Vec<&Candidate> {
        filter_list(self.store.all(), &self.search, |candidate| {
            self.status_filter.matches(&candidate.status)
        })
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.store.get(id)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(CandidateDraft::default());
    }

    pub fn open_edit(&mut self, id: CandidateId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, CandidateDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<CandidateId, CandidateDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut CandidateDraft> {
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
                    Candidate::from_draft(id, &commit.draft, today)
                });
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| record.update(&commit.draft))
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: CandidateId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_candidates() -> Vec<Candidate> {
    let rows = [
        (
            1,
            "Leasie Watson",
            "UI/UX Designer",
            date(2023, 7, 14),
            "leasie.w@demo.com",
            "(629) 555-0129",
            CandidateStatus::Selected,
        ),
        (
            2,
            "Floyd Miles",
            "Sales Manager",
            date(2023, 7, 14),
            "floyd.m@demo.com",
            "(217) 555-0113",
            CandidateStatus::InReview,
        ),
        (
            3,
            "Theresa Webb",
            "Sr. UX Designer",
            date(2023, 7, 12),
            "theresa.w@demo.com",
            "(219) 555-0114",
            CandidateStatus::InReview,
        ),
        (
            4,
            "Darlene Robertson",
            "Sr. Python Developer",
            date(2023, 7, 10),
            "darlene.r@demo.com",
            "(505) 555-0125",
            CandidateStatus::Rejected,
        ),
        (
            5,
            "Esther Howard",
            "BDE",
            date(2023, 7, 9),
            "esther.h@demo.com",
            "(405) 555-0128",
            CandidateStatus::Selected,
        ),
    ];
    rows.into_iter()
        .map(|(id, name, position, applied, email, phone, status)| Candidate {
            id: CandidateId(id),
            name: name.into(),
            position: position.into(),
            applied_date: applied,
            email: email.into(),
            phone: phone.into(),
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::{NotifyKind, RecordingNotifier};

    fn page() -> (CandidatePage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = CandidatePage::new(notifier.clone(), date(2023, 7, 20));
        (page, notifier)
    }

    #[test]
    fn status_filter_narrows_list() {
        let (mut page, _) = page();
        page.set_status_filter(FilterChoice::Only(CandidateStatus::Selected));
        let visible = page.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|c| c.status == CandidateStatus::Selected));
    }

    #[test]
    fn all_sentinel_resets_the_filter() {
        let (mut page, _) = page();
        page.set_status_filter(FilterChoice::Only(CandidateStatus::Rejected));
        assert_eq!(page.visible().len(), 1);
        page.set_status_filter(FilterChoice::from_param("all").unwrap());
        assert_eq!(page.visible().len(), 5);
    }

    #[test]
    fn create_stamps_applied_date_and_uses_added_verb() {
        let (mut page, notifier) = page();
        page.open_create();
        *page.draft_mut().unwrap() = CandidateDraft {
            name: "Jacob Jones".into(),
            position: "Product Manager".into(),
            email: "jacob.j@demo.com".into(),
            phone: "(208) 555-0112".into(),
            status: CandidateStatus::InReview,
        };
        assert!(page.submit());
        let created = page.visible().last().copied().cloned().unwrap();
        assert_eq!(created.applied_date, date(2023, 7, 20));
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Candidate added successfully!".into()))
        );
    }

    #[test]
    fn invalid_email_blocks_submit() {
        let (mut page, _) = page();
        page.open_create();
        let draft = page.draft_mut().unwrap();
        draft.name = "No Email".into();
        draft.position = "QA".into();
        draft.email = "not-an-email".into();
        draft.phone = "(100) 555-0100".into();
        assert!(!page.submit());
        assert_eq!(
            page.form().errors().unwrap().message_for("email"),
            Some("Valid email is required")
        );
    }

    #[test]
    fn search_and_status_combine() {
        let (mut page, _) = page();
        page.set_search("designer");
        page.set_status_filter(FilterChoice::Only(CandidateStatus::InReview));
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Theresa Webb");
    }
}
