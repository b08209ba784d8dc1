pub mod aggregate;

pub use aggregate::{Employee, EmployeeDraft, EmployeeId, EmployeeStatus, WorkType};
