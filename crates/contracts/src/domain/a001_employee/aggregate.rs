use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор сотрудника
    EmployeeId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус сотрудника в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OnLeave => "On Leave",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "On Leave" => Ok(Self::OnLeave),
            other => Err(format!("Unknown employee status: {}", other)),
        }
    }
}

/// Формат работы сотрудника
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkType {
    #[default]
    Office,
    Remote,
    Hybrid,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Сотрудник (запись каталога сотрудников)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,

    /// Бизнес-код записи (например, "EMP001")
    pub employee_code: String,

    // Личные данные
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    // Профессиональные данные
    pub designation: String,
    pub department: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub join_date: Option<NaiveDate>,
    pub working_days: Option<String>,
    pub office_location: Option<String>,
    pub salary: String,
    pub status: EmployeeStatus,

    // Документы (имена загруженных файлов)
    pub documents: Vec<String>,

    // Доступы
    pub email_access: Option<String>,
    pub slack_id: Option<String>,
    pub github_id: Option<String>,
}

impl Employee {
    /// Полное имя для отображения в списке
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Собрать запись из проверенного черновика
    pub fn from_draft(id: EmployeeId, draft: &EmployeeDraft) -> Self {
        Self {
            id,
            employee_code: draft.employee_code.clone(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            date_of_birth: draft.date_of_birth,
            gender: draft.gender.clone(),
            nationality: draft.nationality.clone(),
            marital_status: draft.marital_status.clone(),
            address: draft.address.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            zip_code: draft.zip_code.clone(),
            designation: draft.designation.clone(),
            department: draft.department.clone(),
            work_type: draft.work_type,
            join_date: draft.join_date,
            working_days: draft.working_days.clone(),
            office_location: draft.office_location.clone(),
            salary: draft.salary.clone(),
            status: EmployeeStatus::Active,
            documents: draft.documents.clone(),
            email_access: draft.email_access.clone(),
            slack_id: draft.slack_id.clone(),
            github_id: draft.github_id.clone(),
        }
    }

    /// Обновить данные из черновика; `id` и `status` не меняются
    pub fn update(&mut self, draft: &EmployeeDraft) {
        self.employee_code = draft.employee_code.clone();
        self.first_name = draft.first_name.clone();
        self.last_name = draft.last_name.clone();
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
        self.date_of_birth = draft.date_of_birth;
        self.gender = draft.gender.clone();
        self.nationality = draft.nationality.clone();
        self.marital_status = draft.marital_status.clone();
        self.address = draft.address.clone();
        self.city = draft.city.clone();
        self.state = draft.state.clone();
        self.zip_code = draft.zip_code.clone();
        self.designation = draft.designation.clone();
        self.department = draft.department.clone();
        self.work_type = draft.work_type;
        self.join_date = draft.join_date;
        self.working_days = draft.working_days.clone();
        self.office_location = draft.office_location.clone();
        self.salary = draft.salary.clone();
        self.documents = draft.documents.clone();
        self.email_access = draft.email_access.clone();
        self.slack_id = draft.slack_id.clone();
        self.github_id = draft.github_id.clone();
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы создания/редактирования сотрудника
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub designation: String,
    pub department: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub join_date: Option<NaiveDate>,
    pub working_days: Option<String>,
    pub office_location: Option<String>,
    pub salary: String,
    pub documents: Vec<String>,
    pub email_access: Option<String>,
    pub slack_id: Option<String>,
    pub github_id: Option<String>,
}

impl EmployeeDraft {
    /// Предзаполнить черновик из существующей записи (режим редактирования)
    pub fn from_record(record: &Employee) -> Self {
        Self {
            employee_code: record.employee_code.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            date_of_birth: record.date_of_birth,
            gender: record.gender.clone(),
            nationality: record.nationality.clone(),
            marital_status: record.marital_status.clone(),
            address: record.address.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip_code: record.zip_code.clone(),
            designation: record.designation.clone(),
            department: record.department.clone(),
            work_type: record.work_type,
            join_date: record.join_date,
            working_days: record.working_days.clone(),
            office_location: record.office_location.clone(),
            salary: record.salary.clone(),
            documents: record.documents.clone(),
            email_access: record.email_access.clone(),
            slack_id: record.slack_id.clone(),
            github_id: record.github_id.clone(),
        }
    }
}

impl Validate for EmployeeDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "firstName", &self.first_name, "First name is required");
        rules::required(&mut errors, "lastName", &self.last_name, "Last name is required");
        rules::email(&mut errors, "email", &self.email, "Valid email is required");
        rules::required(&mut errors, "phone", &self.phone, "Phone is required");
        rules::required(&mut errors, "employeeId", &self.employee_code, "Employee ID is required");
        rules::required(&mut errors, "designation", &self.designation, "Designation is required");
        rules::required(&mut errors, "department", &self.department, "Department is required");
        if let Some(email_access) = &self.email_access {
            rules::email_optional(&mut errors, "emailAccess", email_access, "Valid email is required");
        }
        errors.into_result()
    }
}
