pub mod page;

pub use page::LeavePage;
