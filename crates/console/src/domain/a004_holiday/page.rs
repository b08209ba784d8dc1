//! Company holiday calendar page.

use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a004_holiday::{Holiday, HolidayDraft, HolidayId, HolidayKind};

use crate::shared::collection::Collection;
use crate::shared::dispatcher::Dispatcher;
use crate::shared::form::{FormMode, FormSession};
use crate::shared::list_filter::{contains_ci, filter_list, FilterChoice, Searchable};
use crate::shared::surfaces::Notifier;

impl Searchable for Holiday {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}

pub struct HolidayPage {
    store: Collection<Holiday>,
    search: String,
    kind_filter: FilterChoice<HolidayKind>,
    form: FormSession<HolidayId, HolidayDraft>,
    dispatcher: Dispatcher,
    today: NaiveDate,
}

impl HolidayPage {
    pub fn new(notifier: Rc<dyn Notifier>, today: NaiveDate) -> Self {
        Self {
            store: Collection::with_seed(seed_holidays(today)),
            search: String::new(),
            kind_filter: FilterChoice::All,
            form: FormSession::new(),
            dispatcher: Dispatcher::new(notifier),
            today,
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_kind_filter(&mut self, filter: FilterChoice<HolidayKind>) {
        self.kind_filter = filter;
    }

    pub fn visible(&self) -> Vec<&Holiday> {
        filter_list(self.store.all(), &self.search, |holiday| {
            self.kind_filter.matches(&holiday.kind)
        })
    }

    pub fn get(&self, id: HolidayId) -> Option<&Holiday> {
        self.store.get(id)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(HolidayDraft::default());
    }

    pub fn open_edit(&mut self, id: HolidayId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.open_edit(id, HolidayDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    pub fn form(&self) -> &FormSession<HolidayId, HolidayDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut HolidayDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn submit(&mut self) -> bool {
        let Some(commit) = self.form.submit() else {
            return false;
        };
        let today = self.today;
        match commit.mode {
            FormMode::Create => {
                self.dispatcher.submit_create(&mut self.store, |id| {
                    Holiday::from_draft(id, &commit.draft, today)
                });
                true
            }
            FormMode::Edit(id) => self
                .dispatcher
                .submit_update(&mut self.store, id, |record| {
                    record.update(&commit.draft, today)
                })
                .is_ok(),
        }
    }

    pub fn delete(&mut self, id: HolidayId) {
        let _ = self.dispatcher.remove(&mut self.store, id);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn seed_holidays(today: NaiveDate) -> Vec<Holiday> {
    let rows = [
        (1, "New Year", date(2023, 1, 1)),
        (2, "International Programmers' Day", date(2023, 1, 7)),
        (3, "World Cancer Day", date(2023, 2, 4)),
        (4, "April Fool Day", date(2023, 4, 1)),
        (5, "International Workers' Day", date(2023, 5, 1)),
        (6, "World Environment Day", date(2023, 6, 5)),
        (7, "Independence Day", date(2023, 7, 4)),
        (8, "Christmas Day", date(2023, 12, 25)),
    ];
    rows.into_iter()
        .map(|(id, name, day)| {
            let draft = HolidayDraft {
                name: name.into(),
                date: Some(day),
            };
            Holiday::from_draft(HolidayId(id), &draft, today)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::{NotifyKind, RecordingNotifier};

    fn page() -> (HolidayPage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = HolidayPage::new(notifier.clone(), date(2023, 6, 1));
        (page, notifier)
    }

    #[test]
    fn kind_filter_splits_past_and_upcoming() {
        let (mut page, _) = page();
        page.set_kind_filter(FilterChoice::Only(HolidayKind::Upcoming));
        assert_eq!(page.visible().len(), 3);
        page.set_kind_filter(FilterChoice::Only(HolidayKind::Past));
        assert_eq!(page.visible().len(), 5);
    }

    #[test]
    fn create_derives_day_of_week_and_says_added() {
        let (mut page, notifier) = page();
        page.open_create();
        *page.draft_mut().unwrap() = HolidayDraft {
            name: "Halloween".into(),
            date: Some(date(2023, 10, 31)),
        };
        assert!(page.submit());
        let created = page
            .visible()
            .into_iter()
            .find(|h| h.name == "Halloween")
            .cloned()
            .unwrap();
        assert_eq!(created.day, "Tuesday");
        assert_eq!(created.kind, HolidayKind::Upcoming);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Holiday added successfully!".into()))
        );
    }

    #[test]
    fn moving_the_date_reclassifies() {
        let (mut page, _) = page();
        assert!(page.open_edit(HolidayId(4)));
        page.draft_mut().unwrap().date = Some(date(2023, 9, 4));
        assert!(page.submit());
        let holiday = page.get(HolidayId(4)).unwrap();
        assert_eq!(holiday.kind, HolidayKind::Upcoming);
        assert_eq!(holiday.day, "Monday");
    }

    #[test]
    fn missing_date_blocks_submit() {
        let (mut page, _) = page();
        page.open_create();
        page.draft_mut().unwrap().name = "Company Day".into();
        assert!(!page.submit());
        assert_eq!(
            page.form().errors().unwrap().message_for("date"),
            Some("Date is required")
        );
    }
}
