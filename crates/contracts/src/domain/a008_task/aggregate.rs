use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a007_project::{Priority, ProjectId};
use crate::domain::common::{rules, Entity, Validate, ValidationErrors};
use crate::entity_id;

// ============================================================================
// ID Type
// ============================================================================

entity_id!(
    /// Уникальный идентификатор задачи
    TaskId
);

// ============================================================================
// Enums
// ============================================================================

/// Колонка kanban-доски задач
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardColumn {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Done,
}

impl BoardColumn {
    /// Все колонки в порядке отображения на доске
    pub const ALL: [BoardColumn; 4] = [Self::ToDo, Self::InProgress, Self::Review, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoardColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To Do" => Ok(Self::ToDo),
            "In Progress" => Ok(Self::InProgress),
            "Review" => Ok(Self::Review),
            "Done" => Ok(Self::Done),
            other => Err(format!("Unknown board column: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Задача на kanban-доске
///
/// Поле `project` — ссылка по идентификатору; отображаемое имя проекта
/// разрешается справочником на стороне страницы, поэтому переименование
/// проекта видно на карточках без каскадных правок.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub project: ProjectId,
    pub status: BoardColumn,
}

impl Task {
    /// Собрать задачу из проверенного черновика; новая задача попадает в "To Do"
    pub fn from_draft(id: TaskId, draft: &TaskDraft) -> Self {
        // validate() гарантирует наличие проекта
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            assignee: draft.assignee.clone(),
            priority: draft.priority,
            due_date: draft.due_date,
            project: draft.project.unwrap_or(ProjectId(0)),
            status: BoardColumn::ToDo,
        }
    }

    /// Обновить данные из черновика; колонка доски меняется только move-операцией
    pub fn update(&mut self, draft: &TaskDraft) {
        self.title = draft.title.clone();
        self.description = draft.description.clone();
        self.assignee = draft.assignee.clone();
        self.priority = draft.priority;
        self.due_date = draft.due_date;
        if let Some(project) = draft.project {
            self.project = project;
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn element_name() -> &'static str {
        "Task"
    }

    fn list_name() -> &'static str {
        "Tasks"
    }
}

// ============================================================================
// Forms / Drafts
// ============================================================================

/// Черновик формы задачи
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub project: Option<ProjectId>,
}

impl TaskDraft {
    pub fn from_record(record: &Task) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            assignee: record.assignee.clone(),
            priority: record.priority,
            due_date: record.due_date,
            project: Some(record.project),
        }
    }
}

impl Validate for TaskDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "title", &self.title, "Task title is required");
        rules::required(&mut errors, "description", &self.description, "Description is required");
        rules::required(&mut errors, "assignee", &self.assignee, "Assignee is required");
        rules::required_value(&mut errors, "dueDate", &self.due_date, "Due date is required");
        rules::required_value(&mut errors, "project", &self.project, "Project is required");
        errors.into_result()
    }
}
