pub mod page;

pub use page::HolidayPage;
