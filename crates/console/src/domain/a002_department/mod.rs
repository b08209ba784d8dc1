pub mod page;

pub use page::DepartmentPage;
