pub mod aggregate;

pub use aggregate::{PayrollDraft, PayrollId, PayrollRecord, PayrollStatus};
