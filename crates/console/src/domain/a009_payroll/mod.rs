pub mod page;

pub use page::{PayrollPage, PayrollTotals};
