pub mod aggregate;

pub use aggregate::{Department, DepartmentDraft, DepartmentId, DepartmentStatus};
