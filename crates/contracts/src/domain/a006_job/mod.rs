pub mod aggregate;

pub use aggregate::{Job, JobDraft, JobId, JobStatus, JobType};
