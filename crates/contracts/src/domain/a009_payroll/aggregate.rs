use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор расчётной записи
    PayrollId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус выплаты
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollStatus {
    Paid,
    #[default]
    Pending,
}

impl PayrollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PayrollStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(Self::Paid),
            "Pending" => Ok(Self::Pending),
            other => Err(format!("Unknown payroll status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Расчётная запись сотрудника за период
///
/// Инвариант: `net_salary = basic_salary + allowances - deductions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: PayrollId,
    /// Бизнес-код сотрудника (например, "EMP001")
    pub employee_code: String,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub basic_salary: i64,
    pub allowances: i64,
    pub deductions: i64,
    pub net_salary: i64,
    pub status: PayrollStatus,
    pub pay_date: NaiveDate,
}

impl PayrollRecord {
    /// Собрать запись из проверенного черновика; чистая сумма вычисляется
    pub fn from_draft(id: PayrollId, draft: &PayrollDraft, pay_date: NaiveDate) -> Self {
        Self {
            id,
            employee_code: draft.employee_code.clone(),
            name: draft.name.clone(),
            designation: draft.designation.clone(),
            department: draft.department.clone(),
            basic_salary: draft.basic_salary,
            allowances: draft.allowances,
            deductions: draft.deductions,
            net_salary: draft.basic_salary + draft.allowances - draft.deductions,
            status: PayrollStatus::Pending,
            pay_date,
        }
    }

    /// Обновить суммы из черновика; чистая сумма пересчитывается
    pub fn update(&mut self, draft: &PayrollDraft) {
        self.employee_code = draft.employee_code.clone();
        self.name = draft.name.clone();
        self.designation = draft.designation.clone();
        self.department = draft.department.clone();
        self.basic_salary = draft.basic_salary;
        self.allowances = draft.allowances;
        self.deductions = draft.deductions;
        self.net_salary = draft.basic_salary + draft.allowances - draft.deductions;
    }

    /// Отметить запись выплаченной
    pub fn mark_paid(&mut self) {
        self.status = PayrollStatus::Paid;
    }
}

impl Entity for PayrollRecord {
    type Id = PayrollId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Payroll record"
    }

    fn list_name() -> &'static str {
        "Payroll records"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик расчётной записи
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDraft {
    pub employee_code: String,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub basic_salary: i64,
    pub allowances: i64,
    pub deductions: i64,
}

impl PayrollDraft {
    pub fn from_record(record: &PayrollRecord) -> Self {
        Self {
            employee_code: record.employee_code.clone(),
            name: record.name.clone(),
            designation: record.designation.clone(),
            department: record.department.clone(),
            basic_salary: record.basic_salary,
            allowances: record.allowances,
            deductions: record.deductions,
        }
    }
}

impl Validate for PayrollDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "employeeId", &self.employee_code, "Employee ID is required");
        rules::required(&mut errors, "name", &self.name, "Name is required");
        rules::range(
            &mut errors,
            "basicSalary",
            self.basic_salary,
            0,
            i64::MAX,
            "Basic salary must not be negative",
        );
        rules::range(
            &mut errors,
            "allowances",
            self.allowances,
            0,
            i64::MAX,
            "Allowances must not be negative",
        );
        rules::range(
            &mut errors,
            "deductions",
            self.deductions,
            0,
            i64::MAX,
            "Deductions must not be negative",
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PayrollDraft {
        PayrollDraft {
            employee_code: "EMP001".into(),
            name: "Brooklyn Simmons".into(),
            designation: "Project Manager".into(),
            department: "Development".into(),
            basic_salary: 75_000,
            allowances: 5_000,
            deductions: 2_000,
        }
    }

    #[test]
    fn net_salary_is_computed() {
        let pay_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let record = PayrollRecord::from_draft(PayrollId(1), &valid_draft(), pay_date);
        assert_eq!(record.net_salary, 78_000);
        assert_eq!(record.status, PayrollStatus::Pending);
    }

    #[test]
    fn update_recomputes_net_salary() {
        let pay_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let mut record = PayrollRecord::from_draft(PayrollId(1), &valid_draft(), pay_date);
        let mut draft = PayrollDraft::from_record(&record);
        draft.deductions = 3_000;
        record.update(&draft);
        assert_eq!(record.net_salary, 77_000);
    }

    #[test]
    fn negative_amounts_rejected() {
        let mut draft = valid_draft();
        draft.deductions = -10;
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.message_for("deductions"),
            Some("Deductions must not be negative")
        );
    }
}
