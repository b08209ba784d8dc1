use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор заявки на отпуск
    LeaveId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус заявки на отпуск
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(format!("Unknown leave status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Заявка на отпуск
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: LeaveId,
    pub employee_name: String,
    /// Тип отпуска (отображаемая строка: "Sick Leave", "Annual Leave"...)
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
}

impl Leave {
    /// Собрать запись из проверенного черновика: статус Pending, подана сегодня
    pub fn from_draft(id: LeaveId, draft: &LeaveDraft, today: NaiveDate) -> Self {
        Self {
            id,
            employee_name: draft.employee_name.clone(),
            leave_type: draft.leave_type.clone(),
            start_date: draft.start_date.unwrap_or(today),
            end_date: draft.end_date.unwrap_or(today),
            reason: draft.reason.clone(),
            status: LeaveStatus::Pending,
            applied_date: today,
        }
    }

    /// Обновить данные из черновика; статус и дата подачи не меняются
    pub fn update(&mut self, draft: &LeaveDraft) {
        self.employee_name = draft.employee_name.clone();
        self.leave_type = draft.leave_type.clone();
        if let Some(start) = draft.start_date {
            self.start_date = start;
        }
        if let Some(end) = draft.end_date {
            self.end_date = end;
        }
        self.reason = draft.reason.clone();
    }
}

impl Entity for Leave {
    type Id = LeaveId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Leave request"
    }

    fn list_name() -> &'static str {
        "Leave requests"
    }

    fn create_verb() -> &'static str {
        "submitted"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик заявки на отпуск
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: String,
}

impl LeaveDraft {
    pub fn from_record(record: &Leave) -> Self {
        Self {
            employee_name: record.employee_name.clone(),
            leave_type: record.leave_type.clone(),
            start_date: Some(record.start_date),
            end_date: Some(record.end_date),
            reason: record.reason.clone(),
        }
    }
}

impl Validate for LeaveDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "employeeName", &self.employee_name, "Employee name is required");
        rules::required(&mut errors, "leaveType", &self.leave_type, "Leave type is required");
        rules::required_value(&mut errors, "startDate", &self.start_date, "Start date is required");
        rules::required_value(&mut errors, "endDate", &self.end_date, "End date is required");
        rules::required(&mut errors, "reason", &self.reason, "Reason is required");
        // Межполевое правило: окончание не раньше начала
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                errors.push("endDate", "End date must not be before start date");
            }
        }
        errors.into_result()
    }
}
