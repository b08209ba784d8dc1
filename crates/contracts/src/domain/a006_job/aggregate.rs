use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор вакансии
    JobId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус публикации вакансии
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Closed,
    #[default]
    Draft,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Draft => "Draft",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            "Draft" => Ok(Self::Draft),
            other => Err(format!("Unknown job status: {}", other)),
        }
    }
}

/// Тип занятости
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Remote => "Remote",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(Self::FullTime),
            "Part-time" => Ok(Self::PartTime),
            "Contract" => Ok(Self::Contract),
            "Remote" => Ok(Self::Remote),
            other => Err(format!("Unknown job type: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Вакансия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub salary: String,
    pub posted_date: NaiveDate,
    pub deadline: Option<NaiveDate>,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub applicants: u32,
}

impl Job {
    /// Собрать вакансию из проверенного черновика: опубликована сегодня,
    /// без откликов
    pub fn from_draft(id: JobId, draft: &JobDraft, today: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            department: draft.department.clone(),
            location: draft.location.clone(),
            job_type: draft.job_type,
            status: draft.status,
            salary: draft.salary.clone(),
            posted_date: today,
            deadline: draft.deadline,
            description: draft.description.clone(),
            requirements: draft.requirements.clone(),
            benefits: draft.benefits.clone(),
            applicants: 0,
        }
    }

    /// Обновить данные; дата публикации и счётчик откликов не редактируются
    pub fn update(&mut self, draft: &JobDraft) {
        self.title = draft.title.clone();
        self.department = draft.department.clone();
        self.location = draft.location.clone();
        self.job_type = draft.job_type;
        self.status = draft.status;
        self.salary = draft.salary.clone();
        self.deadline = draft.deadline;
        self.description = draft.description.clone();
        self.requirements = draft.requirements.clone();
        self.benefits = draft.benefits.clone();
    }
}

impl Entity for Job {
    type Id = JobId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Job"
    }

    fn list_name() -> &'static str {
        "Jobs"
    }

    fn create_verb() -> &'static str {
        "posted"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы вакансии
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub salary: String,
    pub deadline: Option<NaiveDate>,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
}

impl JobDraft {
    pub fn from_record(record: &Job) -> Self {
        Self {
            title: record.title.clone(),
            department: record.department.clone(),
            location: record.location.clone(),
            job_type: record.job_type,
            status: record.status,
            salary: record.salary.clone(),
            deadline: record.deadline,
            description: record.description.clone(),
            requirements: record.requirements.clone(),
            benefits: record.benefits.clone(),
        }
    }
}

impl Validate for JobDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "title", &self.title, "Job title is required");
        rules::required(&mut errors, "department", &self.department, "Department is required");
        rules::required(&mut errors, "location", &self.location, "Location is required");
        rules::required(&mut errors, "salary", &self.salary, "Salary is required");
        rules::required(&mut errors, "description", &self.description, "Description is required");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> JobDraft {
        JobDraft {
            title: "Senior Frontend Developer".into(),
            department: "Engineering".into(),
            location: "New York, NY".into(),
            job_type: JobType::FullTime,
            status: JobStatus::Open,
            salary: "$80,000 - $120,000".into(),
            deadline: NaiveDate::from_ymd_opt(2024, 2, 15),
            description: "We are looking for a Senior Frontend Developer to join our team.".into(),
            requirements: "5+ years of React experience".into(),
            benefits: "Health insurance, 401k".into(),
        }
    }

    #[test]
    fn fresh_posting_has_no_applicants() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let job = Job::from_draft(JobId(1), &valid_draft(), today);
        assert_eq!(job.applicants, 0);
        assert_eq!(job.posted_date, today);
    }

    #[test]
    fn update_keeps_posted_date_and_applicants() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut job = Job::from_draft(JobId(1), &valid_draft(), today);
        job.applicants = 12;
        let mut draft = JobDraft::from_record(&job);
        draft.status = JobStatus::Closed;
        job.update(&draft);
        assert_eq!(job.applicants, 12);
        assert_eq!(job.posted_date, today);
        assert_eq!(job.status, JobStatus::Closed);
    }

    #[test]
    fn required_fields() {
        let errors = JobDraft::default().validate().unwrap_err();
        assert_eq!(errors.message_for("title"), Some("Job title is required"));
        assert_eq!(errors.message_for("salary"), Some("Salary is required"));
    }
}
