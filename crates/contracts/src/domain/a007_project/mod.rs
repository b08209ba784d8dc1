pub mod aggregate;

pub use aggregate::{Priority, Project, ProjectDraft, ProjectId, ProjectStatus};
