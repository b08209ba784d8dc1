pub mod page;

pub use page::AttendancePage;
