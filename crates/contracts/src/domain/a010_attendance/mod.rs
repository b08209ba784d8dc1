pub mod aggregate;

pub use aggregate::{AttendanceDraft, AttendanceId, AttendanceRecord, AttendanceStatus};
