use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор кандидата
    CandidateId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус кандидата в воронке найма
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    Selected,
    #[default]
    #[serde(rename = "In Review")]
    InReview,
    Rejected,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selected => "Selected",
            Self::InReview => "In Review",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Selected" => Ok(Self::Selected),
            "In Review" => Ok(Self::InReview),
            "Rejected" => Ok(Self::Rejected),
            other => Err(format!("Unknown candidate status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Кандидат на вакансию
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub position: String,
    pub applied_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub status: CandidateStatus,
}

impl Candidate {
    /// Собрать запись из проверенного черновика; дата подачи — сегодня
    pub fn from_draft(id: CandidateId, draft: &CandidateDraft, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            position: draft.position.clone(),
            applied_date: today,
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            status: draft.status,
        }
    }

    /// Обновить данные из черновика; дата подачи не меняется
    pub fn update(&mut self, draft: &CandidateDraft) {
        self.name = draft.name.clone();
        self.position = draft.position.clone();
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
        self.status = draft.status;
    }
}

impl Entity for Candidate {
    type Id = CandidateId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Candidate"
    }

    fn list_name() -> &'static str {
        "Candidates"
    }

    fn create_verb() -> &'static str {
        "added"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы кандидата
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateDraft {
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub status: CandidateStatus,
}

impl CandidateDraft {
    pub fn from_record(record: &Candidate) -> Self {
        Self {
            name: record.name.clone(),
            position: record.position.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            status: record.status,
        }
    }
}

impl Validate for CandidateDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "name", &self.name, "Name is required");
        rules::required(&mut errors, "position", &self.position, "Position is required");
        rules::email(&mut errors, "email", &self.email, "Valid email is required");
        rules::required(&mut errors, "phone", &self.phone, "Phone is required");
        errors.into_result()
    }
}
