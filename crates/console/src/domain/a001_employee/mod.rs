pub mod page;

pub use page::{EmployeePage, EmployeeStage, EmployeeStats};
