use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор отдела
    DepartmentId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус отдела
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepartmentStatus {
    #[default]
    Active,
    Inactive,
}

impl DepartmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for DepartmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DepartmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(format!("Unknown department status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Отдел компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub description: String,
    /// Руководитель отдела (отображаемое имя)
    pub head: String,
    pub employee_count: u32,
    pub location: String,
    pub budget: String,
    pub established: NaiveDate,
    pub status: DepartmentStatus,
}

impl Department {
    /// Собрать запись из проверенного черновика
    ///
    /// Новый отдел всегда активен, без сотрудников, основан сегодня.
    pub fn from_draft(id: DepartmentId, draft: &DepartmentDraft, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            head: draft.head.clone(),
            employee_count: 0,
            location: draft.location.clone(),
            budget: draft.budget.clone(),
            established: today,
            status: DepartmentStatus::Active,
        }
    }

    /// Обновить данные из черновика; счётчик сотрудников и дата основания
    /// не редактируются через форму
    pub fn update(&mut self, draft: &DepartmentDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.head = draft.head.clone();
        self.location = draft.location.clone();
        self.budget = draft.budget.clone();
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Department"
    }

    fn list_name() -> &'static str {
        "Departments"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы отдела
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub name: String,
    pub description: String,
    pub head: String,
    pub location: String,
    pub budget: String,
}

impl DepartmentDraft {
    pub fn from_record(record: &Department) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            head: record.head.clone(),
            location: record.location.clone(),
            budget: record.budget.clone(),
        }
    }
}

impl Validate for DepartmentDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "name", &self.name, "Department name is required");
        rules::required(&mut errors, "description", &self.description, "Description is required");
        rules::required(&mut errors, "head", &self.head, "Department head is required");
        rules::required(&mut errors, "location", &self.location, "Location is required");
        rules::required(&mut errors, "budget", &self.budget, "Budget is required");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> DepartmentDraft {
        DepartmentDraft {
            name: "Legal".into(),
            description: "Contracts and compliance".into(),
            head: "Ann Clark".into(),
            location: "Floor 1, Building A".into(),
            budget: "$120,000".into(),
        }
    }

    #[test]
    fn fresh_department_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let dept = Department::from_draft(DepartmentId(5), &valid_draft(), today);
        assert_eq!(dept.employee_count, 0);
        assert_eq!(dept.established, today);
        assert_eq!(dept.status, DepartmentStatus::Active);
    }

    #[test]
    fn update_does_not_touch_established() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut dept = Department::from_draft(DepartmentId(5), &valid_draft(), today);
        dept.employee_count = 7;
        let mut draft = DepartmentDraft::from_record(&dept);
        draft.budget = "$150,000".into();
        dept.update(&draft);
        assert_eq!(dept.established, today);
        assert_eq!(dept.employee_count, 7);
        assert_eq!(dept.budget, "$150,000");
    }

    #[test]
    fn every_field_is_required() {
        let errors = DepartmentDraft::default().validate().unwrap_err();
        assert_eq!(errors.errors.len(), 5);
    }
}
