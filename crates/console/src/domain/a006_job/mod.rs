pub mod page;

pub use page::{JobPage, JobStats};
