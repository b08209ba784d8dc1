use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор отметки посещаемости
    AttendanceId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус посещаемости за день
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Late,
    #[serde(rename = "Half Day")]
    HalfDay,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Late => "Late",
            Self::HalfDay => "Half Day",
            Self::Absent => "Absent",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Self::Present),
            "Late" => Ok(Self::Late),
            "Half Day" => Ok(Self::HalfDay),
            "Absent" => Ok(Self::Absent),
            other => Err(format!("Unknown attendance status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Отметка посещаемости сотрудника за день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub name: String,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn from_draft(id: AttendanceId, draft: &AttendanceDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            date: draft.date.unwrap_or_default(),
            check_in: draft.check_in,
            check_out: draft.check_out,
            status: draft.status,
        }
    }

    pub fn update(&mut self, draft: &AttendanceDraft) {
        self.name = draft.name.clone();
        if let Some(date) = draft.date {
            self.date = date;
        }
        self.check_in = draft.check_in;
        self.check_out = draft.check_out;
        self.status = draft.status;
    }

    /// Отработанные часы в отображаемом виде ("8h", "4.5h", "-")
    pub fn hours(&self) -> String {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                let minutes = (check_out - check_in).num_minutes();
                if minutes % 60 == 0 {
                    format!("{}h", minutes / 60)
                } else {
                    format!("{:.1}h", minutes as f64 / 60.0)
                }
            }
            _ => "-".to_string(),
        }
    }
}

impl Entity for AttendanceRecord {
    type Id = AttendanceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Attendance record"
    }

    fn list_name() -> &'static str {
        "Attendance records"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик отметки посещаемости
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

impl AttendanceDraft {
    pub fn from_record(record: &AttendanceRecord) -> Self {
        Self {
            name: record.name.clone(),
            date: Some(record.date),
            check_in: record.check_in,
            check_out: record.check_out,
            status: record.status,
        }
    }
}

impl Validate for AttendanceDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "name", &self.name, "Employee name is required");
        rules::required_value(&mut errors, "date", &self.date, "Date is required");
        // Межполевое правило: уход не раньше прихода
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out < check_in {
                errors.push("checkOut", "Check-out must not be before check-in");
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn whole_hours_formatting() {
        let draft = AttendanceDraft {
            name: "John Doe".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 15),
            check_in: at(9, 0),
            check_out: at(17, 0),
            status: AttendanceStatus::Present,
        };
        let record = AttendanceRecord::from_draft(AttendanceId(1), &draft);
        assert_eq!(record.hours(), "8h");
    }

    #[test]
    fn fractional_hours_formatting() {
        let draft = AttendanceDraft {
            name: "Bob Johnson".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 17),
            check_in: at(9, 0),
            check_out: at(13, 30),
            status: AttendanceStatus::HalfDay,
        };
        let record = AttendanceRecord::from_draft(AttendanceId(3), &draft);
        assert_eq!(record.hours(), "4.5h");
    }

    #[test]
    fn missing_check_out_shows_dash() {
        let draft = AttendanceDraft {
            name: "Jane Smith".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 16),
            check_in: at(10, 30),
            check_out: None,
            status: AttendanceStatus::Late,
        };
        let record = AttendanceRecord::from_draft(AttendanceId(2), &draft);
        assert_eq!(record.hours(), "-");
    }

    #[test]
    fn check_out_before_check_in_rejected() {
        let draft = AttendanceDraft {
            name: "Jane Smith".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 16),
            check_in: at(10, 0),
            check_out: at(9, 0),
            status: AttendanceStatus::Present,
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.message_for("checkOut"),
            Some("Check-out must not be before check-in")
        );
    }
}
