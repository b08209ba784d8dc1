pub mod aggregate;

pub use aggregate::{Candidate, CandidateDraft, CandidateId, CandidateStatus};
