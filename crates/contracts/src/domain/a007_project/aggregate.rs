use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор проекта
    ProjectId
);

// ============================================================================
// Enums
// ============================================================================

/// Статус проекта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(Self::Planning),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "On Hold" => Ok(Self::OnHold),
            other => Err(format!("Unknown project status: {}", other)),
        }
    }
}

/// Приоритет (общий для проектов и задач)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Проект
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub budget: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub team_lead: String,
    /// Процент готовности, 0..=100
    pub progress: u8,
    pub team_size: u32,
}

impl Project {
    pub fn from_draft(id: ProjectId, draft: &ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            deadline: draft.deadline,
            budget: draft.budget.clone(),
            status: draft.status,
            priority: draft.priority,
            team_lead: draft.team_lead.clone(),
            progress: 0,
            team_size: 1,
        }
    }

    /// Обновить данные; прогресс и размер команды не редактируются формой
    pub fn update(&mut self, draft: &ProjectDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.deadline = draft.deadline;
        self.budget = draft.budget.clone();
        self.status = draft.status;
        self.priority = draft.priority;
        self.team_lead = draft.team_lead.clone();
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Project"
    }

    fn list_name() -> &'static str {
        "Projects"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы проекта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub budget: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub team_lead: String,
}

impl ProjectDraft {
    pub fn from_record(record: &Project) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            deadline: record.deadline,
            budget: record.budget.clone(),
            status: record.status,
            priority: record.priority,
            team_lead: record.team_lead.clone(),
        }
    }
}

impl Validate for ProjectDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "name", &self.name, "Project name is required");
        rules::required(&mut errors, "description", &self.description, "Description is required");
        rules::required_value(&mut errors, "deadline", &self.deadline, "Deadline is required");
        rules::required(&mut errors, "budget", &self.budget, "Budget is required");
        rules::required(&mut errors, "teamLead", &self.team_lead, "Team lead is required");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProjectDraft {
        ProjectDraft {
            name: "HRMS Development".into(),
            description: "Complete Human Resource Management System".into(),
            deadline: NaiveDate::from_ymd_opt(2024, 8, 15),
            budget: "$45,000".into(),
            status: ProjectStatus::InProgress,
            priority: Priority::High,
            team_lead: "John Doe".into(),
        }
    }

    #[test]
    fn fresh_project_starts_at_zero_progress() {
        let project = Project::from_draft(ProjectId(1), &valid_draft());
        assert_eq!(project.progress, 0);
        assert_eq!(project.team_size, 1);
    }

    #[test]
    fn update_keeps_progress() {
        let mut project = Project::from_draft(ProjectId(1), &valid_draft());
        project.progress = 75;
        let mut draft = ProjectDraft::from_record(&project);
        draft.status = ProjectStatus::OnHold;
        project.update(&draft);
        assert_eq!(project.progress, 75);
        assert_eq!(project.status, ProjectStatus::OnHold);
    }

    #[test]
    fn deadline_is_required() {
        let mut draft = valid_draft();
        draft.deadline = None;
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.message_for("deadline"), Some("Deadline is required"));
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
