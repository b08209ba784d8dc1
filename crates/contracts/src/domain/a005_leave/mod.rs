pub mod aggregate;

pub use aggregate::{Leave, LeaveDraft, LeaveId, LeaveStatus};
