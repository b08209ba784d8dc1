use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор праздника
    HolidayId
);

// ============================================================================
// Enums
// ============================================================================

/// Праздник относительно текущей даты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayKind {
    Upcoming,
    Past,
}

impl HolidayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
        }
    }

    /// Классифицировать дату праздника относительно сегодняшней
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        if date < today {
            Self::Past
        } else {
            Self::Upcoming
        }
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HolidayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(Self::Upcoming),
            "Past" => Ok(Self::Past),
            other => Err(format!("Unknown holiday kind: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Праздничный день в календаре компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: HolidayId,
    pub name: String,
    pub date: NaiveDate,
    /// День недели, производное от даты
    pub day: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}

impl Holiday {
    pub fn from_draft(id: HolidayId, draft: &HolidayDraft, today: NaiveDate) -> Self {
        // validate() гарантирует наличие даты
        let date = draft.date.unwrap_or(today);
        Self {
            id,
            name: draft.name.clone(),
            date,
            day: weekday_name(date.weekday()).to_string(),
            kind: HolidayKind::classify(date, today),
        }
    }

    /// Обновить данные; день недели и классификация пересчитываются от даты
    pub fn update(&mut self, draft: &HolidayDraft, today: NaiveDate) {
        self.name = draft.name.clone();
        if let Some(date) = draft.date {
            self.date = date;
            self.day = weekday_name(date.weekday()).to_string();
            self.kind = HolidayKind::classify(date, today);
        }
    }
}

impl Entity for Holiday {
    type Id = HolidayId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Holiday"
    }

    fn list_name() -> &'static str {
        "Holidays"
    }

    fn create_verb() -> &'static str {
        "added"
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы праздника
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidayDraft {
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl HolidayDraft {
    pub fn from_record(record: &Holiday) -> Self {
        Self {
            name: record.name.clone(),
            date: Some(record.date),
        }
    }
}

impl Validate for HolidayDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "name", &self.name, "Holiday name is required");
        rules::required_value(&mut errors, "date", &self.date, "Date is required");
        errors.into_result()
    }
}
