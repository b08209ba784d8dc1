pub mod page;

pub use page::ProjectPage;
