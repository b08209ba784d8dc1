pub mod aggregate;

pub use aggregate::{Holiday, HolidayDraft, HolidayId, HolidayKind};
